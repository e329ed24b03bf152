//! TCP connect probing.
//!
//! A probe is one `connect()` to an address/port pair bounded by a timeout. The
//! raw transport result is captured as an [`Attempt`] and then classified into
//! an [`Outcome`]; keeping those two steps apart lets the scanner be driven by
//! fake probers in tests.

use std::io::{self, ErrorKind};
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use sonar_common::network::probe::Outcome;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// What the transport reported for a single connection attempt.
#[derive(Debug)]
pub enum Attempt {
    Connected,
    Failed(io::Error),
    TimedOut,
}

/// Performs one bounded connection attempt.
///
/// Implementations must release any socket they open before returning,
/// whatever the result.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: SocketAddr, wait: Duration) -> Attempt;
}

/// Unprivileged prober built on a plain `connect()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: SocketAddr, wait: Duration) -> Attempt {
        match timeout(wait, TcpStream::connect(addr)).await {
            // the stream is dropped right here, closing the connection
            Ok(Ok(_stream)) => Attempt::Connected,
            Ok(Err(e)) => Attempt::Failed(e),
            Err(_elapsed) => Attempt::TimedOut,
        }
    }
}

impl From<Attempt> for Outcome {
    fn from(attempt: Attempt) -> Self {
        match attempt {
            Attempt::Connected => Outcome::Open,
            Attempt::TimedOut => Outcome::NoResponse,
            Attempt::Failed(e) => classify_error(&e),
        }
    }
}

fn classify_error(e: &io::Error) -> Outcome {
    match e.kind() {
        ErrorKind::ConnectionRefused => Outcome::Responded,
        ErrorKind::PermissionDenied => Outcome::Denied,
        // the kernel gave up on the SYN before our own timer did
        ErrorKind::TimedOut => Outcome::NoResponse,
        _ => Outcome::Unexpected(e.to_string()),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
