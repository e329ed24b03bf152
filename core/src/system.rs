use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use sonar_common::network::interface;
use tracing::debug;

/// First non-loopback IPv4 address of this machine, if it has one.
///
/// Informational only; nothing in the scan path depends on it.
pub fn current_ipv4() -> Option<Ipv4Addr> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    debug!("found {} network interface(s)", interfaces.len());
    interface::select_current_ipv4(&interfaces)
}
