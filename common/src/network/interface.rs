use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;

use crate::utils::interface::NetworkInterfaceExtension;

/// Picks the address shown as "current IP": the first non-loopback IPv4.
///
/// Interfaces that are up win over interfaces that are down; within each group
/// the order reported by the OS is kept.
pub fn select_current_ipv4(interfaces: &[NetworkInterface]) -> Option<Ipv4Addr> {
    let candidates = || interfaces.iter().filter(|intf| !intf.is_loopback());

    candidates()
        .filter(|intf| intf.is_up())
        .find_map(|intf| intf.get_routable_ipv4())
        .or_else(|| candidates().find_map(|intf| intf.get_routable_ipv4()))
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
    use pnet::ipnetwork::{IpNetwork, Ipv4Network};
    use pnet::util::MacAddr;

    const IFF_UP: u32 = 1;
    const IFF_BROADCAST: u32 = 1 << 1;
    const IFF_LOOPBACK: u32 = 1 << 3;

    fn create_mock_interface(name: &str, ips: Vec<IpNetwork>, flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: "An interface".to_string(),
            index: 0,
            mac: Some(MacAddr(0x1, 0x2, 0x3, 0x4, 0x5, 0x6)),
            ips,
            flags,
        }
    }

    fn v4(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> IpNetwork {
        IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), prefix).unwrap())
    }

    fn v6(s: &str) -> IpNetwork {
        IpNetwork::V6(s.parse().unwrap())
    }

    #[test]
    fn select_skips_loopback() {
        let interfaces = vec![
            create_mock_interface("lo", vec![v4(127, 0, 0, 1, 8)], IFF_UP | IFF_LOOPBACK),
            create_mock_interface("eth0", vec![v4(192, 168, 1, 42, 24)], IFF_UP | IFF_BROADCAST),
        ];
        assert_eq!(select_current_ipv4(&interfaces), Some(Ipv4Addr::new(192, 168, 1, 42)));
    }

    #[test]
    fn select_skips_ipv6_only_interfaces() {
        let interfaces = vec![
            create_mock_interface("veth0", vec![v6("fe80::1/64")], IFF_UP | IFF_BROADCAST),
            create_mock_interface(
                "wlan0",
                vec![v6("fe80::2/64"), v4(10, 0, 0, 15, 24)],
                IFF_UP | IFF_BROADCAST,
            ),
        ];
        assert_eq!(select_current_ipv4(&interfaces), Some(Ipv4Addr::new(10, 0, 0, 15)));
    }

    #[test]
    fn select_prefers_interfaces_that_are_up() {
        let interfaces = vec![
            create_mock_interface("eth0", vec![v4(192, 168, 0, 2, 24)], IFF_BROADCAST),
            create_mock_interface("eth1", vec![v4(172, 16, 0, 9, 16)], IFF_UP | IFF_BROADCAST),
        ];
        assert_eq!(select_current_ipv4(&interfaces), Some(Ipv4Addr::new(172, 16, 0, 9)));
    }

    #[test]
    fn select_falls_back_to_down_interfaces() {
        let interfaces = vec![create_mock_interface(
            "eth0",
            vec![v4(192, 168, 0, 2, 24)],
            IFF_BROADCAST,
        )];
        assert_eq!(select_current_ipv4(&interfaces), Some(Ipv4Addr::new(192, 168, 0, 2)));
    }

    #[test]
    fn select_returns_none_without_candidates() {
        let interfaces = vec![create_mock_interface(
            "lo",
            vec![v4(127, 0, 0, 1, 8)],
            IFF_UP | IFF_LOOPBACK,
        )];
        assert_eq!(select_current_ipv4(&interfaces), None);
        assert_eq!(select_current_ipv4(&[]), None);
    }
}
