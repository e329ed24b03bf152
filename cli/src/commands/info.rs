use std::net::Ipv4Addr;

use anyhow::Context;
use colored::*;
use is_root::is_root;

use crate::terminal::{colors, print};
use sonar_common::config::Config;
use sonar_core::system;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));

    print::header("local system", cfg.quiet);
    let hostname: String = sys_info::hostname().context("failed to read hostname")?;
    print::aligned_line("Hostname", hostname);
    print::aligned_line("Current IP", current_ip_to_colored(system::current_ipv4()));
    print::aligned_line("Privileges", privileges_to_colored(is_root()));

    print::end_of_program();
    Ok(())
}

pub fn current_ip_to_colored(ip: Option<Ipv4Addr>) -> ColoredString {
    match ip {
        Some(ip) => ip.to_string().color(colors::IPV4_ADDR),
        None => "N/A".color(colors::SEPARATOR),
    }
}

fn privileges_to_colored(root: bool) -> ColoredString {
    if root {
        "root".color(colors::ACCENT)
    } else {
        "user".color(colors::TEXT_DEFAULT)
    }
}
