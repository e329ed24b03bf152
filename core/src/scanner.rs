//! The range **scanner**.
//!
//! Walks a validated [`ScanRange`] from its first to its last address, sends one
//! bounded TCP probe per address and streams a classified [`ProbeResult`] for
//! each of them back to the caller.
//!
//! **Ordering:** results always arrive in ascending address order. With the
//! default concurrency of `1` only one probe is in flight at a time. Higher
//! values let several probes overlap, but each probe still runs as its own
//! task with its own socket, and results are handed out in address order no
//! matter which probe finishes first.
//!
//! **Cancellation:** [`StopHandle::stop`] is checked before every probe. A probe
//! that is already in flight is allowed to run into its timeout.

use std::collections::VecDeque;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sonar_common::config::Config;
use sonar_common::network::probe::{Outcome, ProbeResult};
use sonar_common::network::range::ScanRange;
use sonar_common::warn;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::network::tcp::{Prober, TcpProber};

const RESULT_BUFFER: usize = 64;

/// Shared flag that ends a running scan before its next probe.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Receiving end of a running scan.
///
/// Yields one [`ProbeResult`] per probed address and then `None`. It cannot be
/// restarted; call [`RangeScanner::scan`] again for a fresh pass. Dropping it
/// ends the scan at the next result.
pub struct ProbeStream {
    rx: mpsc::Receiver<ProbeResult>,
    expected: usize,
}

impl ProbeStream {
    pub async fn next(&mut self) -> Option<ProbeResult> {
        self.rx.recv().await
    }

    /// Number of results a scan that is not stopped will produce.
    pub fn len_hint(&self) -> usize {
        self.expected
    }
}

struct ProbeJob<P> {
    prober: P,
    port: u16,
    timeout: Duration,
}

impl<P: Prober> ProbeJob<P> {
    async fn probe(&self, address: Ipv4Addr) -> ProbeResult {
        let socket_addr = SocketAddr::new(IpAddr::V4(address), self.port);
        let outcome = Outcome::from(self.prober.probe(socket_addr, self.timeout).await);
        trace!(%address, %outcome, "probe finished");
        ProbeResult::new(address, outcome)
    }
}

pub struct RangeScanner<P = TcpProber> {
    job: Arc<ProbeJob<P>>,
    concurrency: usize,
    stop: StopHandle,
}

impl RangeScanner<TcpProber> {
    pub fn new(cfg: &Config) -> Self {
        Self::with_prober(TcpProber, cfg)
    }
}

impl<P: Prober + 'static> RangeScanner<P> {
    pub fn with_prober(prober: P, cfg: &Config) -> Self {
        Self {
            job: Arc::new(ProbeJob {
                prober,
                port: cfg.port,
                timeout: cfg.timeout,
            }),
            concurrency: cfg.concurrency.max(1),
            stop: StopHandle::default(),
        }
    }

    /// Handle for stopping scans started by this scanner.
    ///
    /// Stopping is permanent: later scans from the same scanner yield nothing.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Starts probing `range` on a background task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn scan(&self, range: ScanRange) -> ProbeStream {
        let (tx, rx) = mpsc::channel(RESULT_BUFFER);
        let job = Arc::clone(&self.job);
        let stop = self.stop.clone();

        debug!(
            %range,
            port = self.job.port,
            timeout_ms = self.job.timeout.as_millis() as u64,
            concurrency = self.concurrency,
            "starting scan"
        );

        if self.concurrency > 1 {
            tokio::spawn(run_concurrent(job, range, stop, self.concurrency, tx));
        } else {
            tokio::spawn(run_sequential(job, range, stop, tx));
        }

        ProbeStream {
            rx,
            expected: range.len(),
        }
    }

    /// Runs a whole scan and collects its results.
    pub async fn scan_all(&self, range: ScanRange) -> Vec<ProbeResult> {
        let mut stream = self.scan(range);
        let mut results = Vec::with_capacity(stream.len_hint());
        while let Some(result) = stream.next().await {
            results.push(result);
        }
        results
    }
}

async fn run_sequential<P: Prober>(
    job: Arc<ProbeJob<P>>,
    range: ScanRange,
    stop: StopHandle,
    tx: mpsc::Sender<ProbeResult>,
) {
    for address in range.iter() {
        if stop.is_stopped() {
            debug!(%address, "scan stopped");
            return;
        }
        let result = job.probe(address).await;
        if tx.send(result).await.is_err() {
            debug!("result receiver dropped, ending scan");
            return;
        }
    }
}

async fn run_concurrent<P: Prober + 'static>(
    job: Arc<ProbeJob<P>>,
    range: ScanRange,
    stop: StopHandle,
    limit: usize,
    tx: mpsc::Sender<ProbeResult>,
) {
    let permits = Arc::new(Semaphore::new(limit));

    let mut pending: VecDeque<(Ipv4Addr, JoinHandle<Option<ProbeResult>>)> = range
        .iter()
        .map(|address| {
            let job = Arc::clone(&job);
            let permits = Arc::clone(&permits);
            let stop = stop.clone();
            let handle = tokio::spawn(async move {
                let _permit = permits.acquire_owned().await.ok()?;
                if stop.is_stopped() {
                    return None;
                }
                Some(job.probe(address).await)
            });
            (address, handle)
        })
        .collect();

    // Awaiting in address order keeps delivery deterministic; a stopped probe
    // ends delivery so the caller only ever sees an unbroken prefix of the range.
    while let Some((address, handle)) = pending.pop_front() {
        let result = match handle.await {
            Ok(Some(result)) => result,
            Ok(None) => {
                debug!(%address, "scan stopped");
                break;
            }
            Err(e) => {
                warn!("probe task for {address} failed: {e}");
                ProbeResult::new(address, Outcome::Unexpected(e.to_string()))
            }
        };
        if tx.send(result).await.is_err() {
            debug!("result receiver dropped, ending scan");
            break;
        }
    }

    for (_, handle) in pending {
        handle.abort();
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
