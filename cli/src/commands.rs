pub mod info;
pub mod scan;

use clap::{ArgAction, Args, Parser, Subcommand};
use sonar_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "sonar")]
#[command(about = "Sweeps the last octet of a /24 for hosts that answer a TCP knock.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq also hides the summary)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show networking information about this device
    #[command(alias = "i")]
    Info,
    /// Probe every address between START and END
    #[command(alias = "s")]
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// First address, e.g. 192.168.1.1 (defaults to .1 of this device's /24)
    #[arg(requires = "end")]
    pub start: Option<String>,

    /// Last address, same first three octets as START (defaults to .254)
    #[arg(requires = "start")]
    pub end: Option<String>,

    /// TCP port to knock on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// Per-address timeout in milliseconds
    #[arg(short, long = "timeout-ms", default_value_t = config::DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Number of addresses probed at once (output order is unaffected)
    #[arg(short, long, default_value_t = config::DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Also list addresses that never answered
    #[arg(short, long)]
    pub all: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Settings shared by every command.
    pub fn base_config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            ..Config::default()
        }
    }
}

impl ScanArgs {
    pub fn apply(&self, cfg: Config) -> Config {
        let mut cfg = cfg
            .with_port(self.port)
            .with_timeout_ms(self.timeout_ms)
            .with_concurrency(self.concurrency);
        cfg.show_all = self.all;
        cfg
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
    use clap::CommandFactory;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Result<CommandLine, clap::Error> {
        CommandLine::try_parse_from(std::iter::once("sonar").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn scan_defaults_match_config_defaults() {
        let cli = parse(&["scan", "10.0.0.1", "10.0.0.9"]).unwrap();
        let Commands::Scan(args) = &cli.command else {
            panic!("expected scan command");
        };
        let cfg = args.apply(cli.base_config());

        assert_eq!(args.start.as_deref(), Some("10.0.0.1"));
        assert_eq!(args.end.as_deref(), Some("10.0.0.9"));
        assert_eq!(cfg.port, 1);
        assert_eq!(cfg.timeout, Duration::from_millis(50));
        assert_eq!(cfg.concurrency, 1);
        assert!(!cfg.show_all);
    }

    #[test]
    fn scan_flags_override_config() {
        let cli = parse(&[
            "-q", "s", "10.0.0.1", "10.0.0.9", "-p", "22", "-t", "200", "-c", "32", "--all",
        ])
        .unwrap();
        let Commands::Scan(args) = &cli.command else {
            panic!("expected scan command");
        };
        let cfg = args.apply(cli.base_config());

        assert_eq!(cfg.quiet, 1);
        assert_eq!(cfg.port, 22);
        assert_eq!(cfg.timeout, Duration::from_millis(200));
        assert_eq!(cfg.concurrency, 32);
        assert!(cfg.show_all);
    }

    #[test]
    fn scan_without_addresses_is_allowed() {
        let cli = parse(&["scan"]).unwrap();
        assert!(matches!(cli.command, Commands::Scan(ScanArgs { start: None, end: None, .. })));
    }

    #[test]
    fn scan_with_only_start_is_rejected() {
        assert!(parse(&["scan", "10.0.0.1"]).is_err());
    }
}
