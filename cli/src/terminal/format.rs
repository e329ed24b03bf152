use colored::*;
use sonar_common::network::probe::{Outcome, ProbeResult, ScanSummary};
use sonar_common::network::range::ScanRange;

use crate::terminal::colors;

pub fn range_to_colored(range: &ScanRange) -> ColoredString {
    let [a, b, c] = range.prefix();
    let prefix: ColoredString = format!("{a}.{b}.{c}.").color(colors::IPV4_PREFIX);
    let start: ColoredString = range.start().to_string().color(colors::IPV4_ADDR);
    let end: ColoredString = range.end().to_string().color(colors::IPV4_ADDR);
    let count: ColoredString = format!("({} addresses)", range.len()).color(colors::SEPARATOR);
    format!("{prefix}{start}{}{end} {count}", "-".color(colors::SEPARATOR)).normal()
}

/// One line of live output for a finished probe.
pub fn result_line(result: &ProbeResult, port: u16) -> String {
    let addr: ColoredString = result.address.to_string().color(colors::IPV4_ADDR);
    match &result.outcome {
        Outcome::Open => format!(
            "{addr} is up, port {} accepted the connection",
            port.to_string().color(colors::PORT)
        ),
        Outcome::Responded => format!("Response from {addr}"),
        Outcome::Denied => format!("Denied by {addr}"),
        Outcome::NoResponse => format!("No response from {addr}").dimmed().to_string(),
        Outcome::Unexpected(detail) => format!("{addr}: {detail}"),
    }
}

pub fn summary_line(summary: &ScanSummary) -> String {
    let hosts_up: usize = summary.hosts_up();
    let unit: &str = if hosts_up == 1 { "host" } else { "hosts" };
    let active: ColoredString = format!("{hosts_up} {unit} up").bold().green();
    let probed: ColoredString = format!("{} probed", summary.probed).color(colors::ACCENT);
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64())
        .bold()
        .yellow();

    let mut line: String = format!("Scan Complete: {active} of {probed} in {total_time}");
    if summary.denied > 0 {
        line.push_str(&format!(", {} denied", summary.denied).yellow().to_string());
    }
    if summary.errors > 0 {
        line.push_str(&format!(", {} errors", summary.errors).red().to_string());
    }
    line
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
