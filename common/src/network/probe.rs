//! Results produced by a single probe and their aggregation over a scan.

use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Classified result of one TCP connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The handshake completed: host up, port open.
    Open,
    /// The remote stack refused the connection: host up, port closed.
    Responded,
    /// The local stack refused to send the probe.
    Denied,
    /// Nothing came back before the timeout. Host absent or filtered.
    NoResponse,
    /// Any other transport failure, with the error text.
    Unexpected(String),
}

impl Outcome {
    /// `true` when the address answered in some way.
    pub fn is_host_up(&self) -> bool {
        matches!(self, Outcome::Open | Outcome::Responded)
    }

    /// Silent addresses are expected and normally not worth a line of output.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Outcome::NoResponse)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Open => "open",
            Outcome::Responded => "responded",
            Outcome::Denied => "denied",
            Outcome::NoResponse => "no response",
            Outcome::Unexpected(_) => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unexpected(detail) => write!(f, "error: {detail}"),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub address: Ipv4Addr,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn new(address: Ipv4Addr, outcome: Outcome) -> Self {
        Self { address, outcome }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.outcome)
    }
}

/// Per-outcome tallies for a finished (or stopped) scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub probed: usize,
    pub open: usize,
    pub responded: usize,
    pub denied: usize,
    pub silent: usize,
    pub errors: usize,
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn from_results(results: &[ProbeResult], elapsed: Duration) -> Self {
        let mut summary = Self {
            elapsed,
            ..Self::default()
        };
        for result in results {
            summary.record(&result.outcome);
        }
        summary
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.probed += 1;
        match outcome {
            Outcome::Open => self.open += 1,
            Outcome::Responded => self.responded += 1,
            Outcome::Denied => self.denied += 1,
            Outcome::NoResponse => self.silent += 1,
            Outcome::Unexpected(_) => self.errors += 1,
        }
    }

    pub fn hosts_up(&self) -> usize {
        self.open + self.responded
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
