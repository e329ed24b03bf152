#![cfg(test)]
use std::net::{Ipv4Addr, SocketAddr};

use sonar_common::config::Config;
use sonar_common::error::ValidationError;
use sonar_common::network::probe::{Outcome, ProbeResult};
use sonar_common::network::range::{self, ScanRange};
use sonar_core::scanner::RangeScanner;
use tokio::net::TcpListener;

/// Loopback answers fast; the extra headroom keeps busy CI machines from
/// turning refusals into timeouts.
fn loopback_config(port: u16) -> Config {
    Config::default().with_port(port).with_timeout_ms(500)
}

async fn listen_on_loopback() -> anyhow::Result<(TcpListener, u16)> {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await?;
    let port = listener.local_addr()?.port();
    Ok((listener, port))
}

async fn closed_loopback_port() -> anyhow::Result<u16> {
    let (listener, port) = listen_on_loopback().await?;
    drop(listener);
    Ok(port)
}

/// A listener on 127.0.0.1 accepts; its neighbour on the same port refuses.
#[cfg(target_os = "linux")]
#[tokio::test]
async fn scan_loopback_listener_and_neighbour() -> anyhow::Result<()> {
    let (listener, port) = listen_on_loopback().await?;
    let scan_range: ScanRange = range::validate("127.0.0.1", "127.0.0.2")?;

    let results: Vec<ProbeResult> = RangeScanner::new(&loopback_config(port))
        .scan_all(scan_range)
        .await;

    assert_eq!(
        results,
        vec![
            ProbeResult::new(Ipv4Addr::new(127, 0, 0, 1), Outcome::Open),
            ProbeResult::new(Ipv4Addr::new(127, 0, 0, 2), Outcome::Responded),
        ]
    );
    drop(listener);
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn scan_closed_port_reports_every_address_as_responding() -> anyhow::Result<()> {
    let port = closed_loopback_port().await?;
    let scan_range: ScanRange = range::validate("127.0.0.1", "127.0.0.3")?;

    let results = RangeScanner::new(&loopback_config(port))
        .scan_all(scan_range)
        .await;

    let addresses: Vec<Ipv4Addr> = results.iter().map(|r| r.address).collect();
    assert_eq!(addresses, scan_range.iter().collect::<Vec<_>>());
    assert!(results.iter().all(|r| r.outcome == Outcome::Responded), "{results:?}");
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn concurrent_loopback_scan_matches_sequential() -> anyhow::Result<()> {
    let (listener, port) = listen_on_loopback().await?;
    let scan_range: ScanRange = range::validate("127.0.0.1", "127.0.0.8")?;

    let sequential = RangeScanner::new(&loopback_config(port))
        .scan_all(scan_range)
        .await;
    let concurrent = RangeScanner::new(&loopback_config(port).with_concurrency(4))
        .scan_all(scan_range)
        .await;

    assert_eq!(sequential.len(), 8);
    assert_eq!(sequential, concurrent);
    drop(listener);
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn repeated_scans_agree() -> anyhow::Result<()> {
    let port = closed_loopback_port().await?;
    let scan_range: ScanRange = range::validate("127.0.0.1", "127.0.0.2")?;
    let scanner = RangeScanner::new(&loopback_config(port));

    let first = scanner.scan_all(scan_range).await;
    let second = scanner.scan_all(scan_range).await;

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn malformed_input_never_reaches_the_scanner() {
    let err = range::validate("127.0.0.300", "127.0.0.1").unwrap_err();
    assert!(matches!(err, ValidationError::MalformedStart { .. }));

    let err = range::validate("127.0.0.5", "127.0.1.9").unwrap_err();
    assert!(matches!(err, ValidationError::SubnetMismatch { .. }));

    let err = range::validate("127.0.0.9", "127.0.0.9").unwrap_err();
    assert!(matches!(err, ValidationError::RangeInverted { start: 9, end: 9 }));
}

/// Needs a route to the documentation prefix that silently drops packets.
#[tokio::test]
#[ignore]
async fn unroutable_range_stays_silent() -> anyhow::Result<()> {
    let scan_range: ScanRange = range::validate("203.0.113.1", "203.0.113.3")?;
    let cfg = Config::default().with_timeout_ms(100);

    let results = RangeScanner::new(&cfg).scan_all(scan_range).await;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| !r.outcome.is_host_up()), "{results:?}");
    Ok(())
}
