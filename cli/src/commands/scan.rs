use std::net::Ipv4Addr;
use std::time::Instant;

use anyhow::{Context, bail};
use colored::*;
use tracing::info_span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::{ScanArgs, info::current_ip_to_colored};
use crate::mprint;
use crate::terminal::{colors, format, print, progress};
use sonar_common::network::probe::{Outcome, ProbeResult, ScanSummary};
use sonar_common::network::range::{self, ScanRange};
use sonar_common::{config::Config, error, success, warn};
use sonar_core::scanner::{RangeScanner, StopHandle};
use sonar_core::system;

pub async fn scan(args: &ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let current_ip: Option<Ipv4Addr> = system::current_ipv4();
    let (start, end) = resolve_bounds(args, current_ip)?;
    let range: ScanRange = range::validate(&start, &end)
        .with_context(|| format!("refusing to scan {start} - {end}"))?;

    print_plan(&range, current_ip, cfg);

    let scanner: RangeScanner = RangeScanner::new(cfg);
    let stop: StopHandle = scanner.stop_handle();
    let ctrl_c = tokio::spawn(stop_on_ctrl_c(stop.clone()));

    let span = info_span!("scan");
    span.pb_set_style(&progress::scan_style());
    span.pb_set_length(range.len() as u64);
    let guard = span.enter();

    let start_time: Instant = Instant::now();
    let mut stream = scanner.scan(range);
    let mut results: Vec<ProbeResult> = Vec::with_capacity(stream.len_hint());

    while let Some(result) = stream.next().await {
        report(&result, cfg);
        span.pb_inc(1);
        results.push(result);
    }

    drop(guard);
    drop(span);
    ctrl_c.abort();

    let summary: ScanSummary = ScanSummary::from_results(&results, start_time.elapsed());
    if stop.is_stopped() {
        warn!(
            "Scan interrupted after {} of {} addresses",
            summary.probed,
            range.len()
        );
    }
    scan_ends(&summary, cfg);
    Ok(())
}

/// Start and end as given, or the current /24 from `.1` to `.254`.
fn resolve_bounds(args: &ScanArgs, current_ip: Option<Ipv4Addr>) -> anyhow::Result<(String, String)> {
    match (&args.start, &args.end) {
        (Some(start), Some(end)) => Ok((start.clone(), end.clone())),
        (None, None) => {
            let Some(ip) = current_ip else {
                bail!("no IPv4 address found on this machine, pass START and END explicitly");
            };
            let [a, b, c, _] = ip.octets();
            Ok((format!("{a}.{b}.{c}.1"), format!("{a}.{b}.{c}.254")))
        }
        _ => bail!("START and END must be given together"),
    }
}

fn print_plan(range: &ScanRange, current_ip: Option<Ipv4Addr>, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::aligned_line("Range", format::range_to_colored(range));
    print::aligned_line("Port", cfg.port.to_string().color(colors::PORT));
    print::aligned_line("Timeout", format!("{} ms", cfg.timeout.as_millis()));
    let mode: String = match cfg.concurrency {
        1 => "sequential".to_string(),
        n => format!("{n} probes in flight"),
    };
    print::aligned_line("Mode", mode);
    print::aligned_line("Current IP", current_ip_to_colored(current_ip));
    print::header("probing", cfg.quiet);
}

fn report(result: &ProbeResult, cfg: &Config) {
    let line: String = format::result_line(result, cfg.port);
    match &result.outcome {
        Outcome::Open | Outcome::Responded => success!("{line}"),
        Outcome::Denied => warn!("{line}"),
        Outcome::Unexpected(_) => error!("{line}"),
        Outcome::NoResponse if cfg.show_all => sonar_common::info!("{line}"),
        Outcome::NoResponse => tracing::debug!("{line}"),
    }
}

fn scan_ends(summary: &ScanSummary, cfg: &Config) {
    if summary.hosts_up() == 0 && cfg.quiet == 0 {
        print::header("ZERO HOSTS DETECTED", cfg.quiet);
        print::no_results();
    }

    let output: String = format::summary_line(summary);
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        1 => {
            mprint!();
            success!("{output}");
        }
        _ => {}
    }
}

async fn stop_on_ctrl_c(stop: StopHandle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        stop.stop();
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
