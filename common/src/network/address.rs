//! Strict dotted-decimal IPv4 parsing.
//!
//! [`std::net::Ipv4Addr`]'s own parser rejects leading zeros, which users typing
//! into a prompt do produce (`192.168.001.010`). This parser accepts exactly
//! four groups of one to three ASCII digits and range-checks every group
//! afterwards, so `999` is reported as out of range rather than as garbage.

use std::net::Ipv4Addr;

use crate::error::AddressError;

const OCTET_COUNT: usize = 4;
const MAX_OCTET_DIGITS: usize = 3;

pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, AddressError> {
    let groups: Vec<&str> = s.split('.').collect();
    if groups.len() != OCTET_COUNT {
        return Err(AddressError::WrongGroupCount(groups.len()));
    }

    let mut octets = [0u8; OCTET_COUNT];
    for (idx, (octet, group)) in octets.iter_mut().zip(groups).enumerate() {
        *octet = parse_octet(group, idx + 1)?;
    }

    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(text: &str, position: usize) -> Result<u8, AddressError> {
    if text.is_empty() {
        return Err(AddressError::EmptyOctet { position });
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::NonNumeric {
            position,
            text: text.to_string(),
        });
    }

    if text.len() > MAX_OCTET_DIGITS {
        return Err(AddressError::TooManyDigits {
            position,
            text: text.to_string(),
        });
    }

    let value: u16 = text.parse().map_err(|_| AddressError::NonNumeric {
        position,
        text: text.to_string(),
    })?;

    u8::try_from(value).map_err(|_| AddressError::OctetOutOfRange { position, value })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
