use std::time::Duration;

/// Port 1 is almost never listened on, so a refusal there is a reliable sign
/// that something is alive at the address.
pub const DEFAULT_PORT: u16 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(50);
pub const DEFAULT_CONCURRENCY: usize = 1;

const MIN_TIMEOUT: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port every address is probed on.
    pub port: u16,
    /// Upper bound for a single connection attempt.
    pub timeout: Duration,
    /// Number of probes allowed in flight at once.
    ///
    /// `1` keeps the scan strictly sequential. Results are delivered in
    /// ascending address order regardless of this value.
    pub concurrency: usize,
    pub quiet: u8,
    pub no_banner: bool,
    /// Also report addresses that stayed silent.
    pub show_all: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            quiet: 0,
            no_banner: false,
            show_all: false,
        }
    }
}

impl Config {
    pub fn with_timeout_ms(mut self, millis: u64) -> Self {
        self.timeout = Duration::from_millis(millis).max(MIN_TIMEOUT);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_probes_port_one_with_short_timeout() {
        let cfg = Config::default();
        assert_eq!(cfg.port, 1);
        assert_eq!(cfg.timeout, Duration::from_millis(50));
        assert_eq!(cfg.concurrency, 1);
    }

    #[test]
    fn builders_clamp_degenerate_values() {
        let cfg = Config::default().with_timeout_ms(0).with_concurrency(0);
        assert_eq!(cfg.timeout, Duration::from_millis(1));
        assert_eq!(cfg.concurrency, 1);
    }

    #[test]
    fn builders_override_defaults() {
        let cfg = Config::default()
            .with_timeout_ms(250)
            .with_concurrency(16)
            .with_port(443);
        assert_eq!(cfg.timeout, Duration::from_millis(250));
        assert_eq!(cfg.concurrency, 16);
        assert_eq!(cfg.port, 443);
    }
}
