//! # Scan Range Model
//!
//! A scan range is a run of addresses inside one /24 that only differ in the
//! last octet, e.g. `192.168.1.10` to `192.168.1.20`.
//!
//! [`ScanRange`] has no public constructor: the only way to obtain one is
//! [`validate`], so a scanner can never be handed an unchecked range.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::ValidationError;
use crate::network::address;

/// A validated, inclusive range of IPv4 addresses sharing the same first three octets.
///
/// Invariant: `start < end`, so a range always holds at least two addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanRange {
    prefix: [u8; 3],
    start: u8,
    end: u8,
}

impl ScanRange {
    pub fn prefix(&self) -> [u8; 3] {
        self.prefix
    }

    /// Last octet of the first address.
    pub fn start(&self) -> u8 {
        self.start
    }

    /// Last octet of the final address, inclusive.
    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn first(&self) -> Ipv4Addr {
        self.address(self.start)
    }

    pub fn last(&self) -> Ipv4Addr {
        self.address(self.end)
    }

    /// Number of addresses covered, both ends included.
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Builds the full address for a given last octet.
    pub fn address(&self, last_octet: u8) -> Ipv4Addr {
        let [a, b, c] = self.prefix;
        Ipv4Addr::new(a, b, c, last_octet)
    }

    /// Iterates the range in ascending order, both ends included.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + ExactSizeIterator + Clone {
        let [a, b, c] = self.prefix;
        (self.start..=self.end).map(move |d| Ipv4Addr::new(a, b, c, d))
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.prefix;
        write!(f, "{a}.{b}.{c}.{}-{}", self.start, self.end)
    }
}

/// Checks two raw address strings and turns them into a [`ScanRange`].
///
/// The checks run in a fixed order and the first failure wins:
/// 1. start, then end, must be well-formed dotted-decimal IPv4 addresses;
/// 2. both must share the same first three octets;
/// 3. the start's last octet must be strictly lower than the end's.
///
/// No I/O happens here.
pub fn validate(start: &str, end: &str) -> Result<ScanRange, ValidationError> {
    let start_addr = address::parse_ipv4(start).map_err(|reason| ValidationError::MalformedStart {
        input: start.to_string(),
        reason,
    })?;

    let end_addr = address::parse_ipv4(end).map_err(|reason| ValidationError::MalformedEnd {
        input: end.to_string(),
        reason,
    })?;

    let [s0, s1, s2, s3] = start_addr.octets();
    let [e0, e1, e2, e3] = end_addr.octets();

    if [s0, s1, s2] != [e0, e1, e2] {
        return Err(ValidationError::SubnetMismatch {
            start: start_addr,
            end: end_addr,
        });
    }

    if s3 >= e3 {
        return Err(ValidationError::RangeInverted { start: s3, end: e3 });
    }

    Ok(ScanRange {
        prefix: [s0, s1, s2],
        start: s3,
        end: e3,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
