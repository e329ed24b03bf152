use std::net::Ipv4Addr;

use thiserror::Error;

/// Why a single address string could not be turned into an [`Ipv4Addr`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("expected 4 dot-separated octets, found {0}")]
    WrongGroupCount(usize),
    #[error("octet {position} is empty")]
    EmptyOctet { position: usize },
    #[error("octet {position} ('{text}') is not a number")]
    NonNumeric { position: usize, text: String },
    #[error("octet {position} ('{text}') has more than 3 digits")]
    TooManyDigits { position: usize, text: String },
    #[error("octet {position} ({value}) is outside 0-255")]
    OctetOutOfRange { position: usize, value: u16 },
}

/// Rejections raised before any probe is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("start address '{input}' is not a valid IPv4 address: {reason}")]
    MalformedStart {
        input: String,
        #[source]
        reason: AddressError,
    },
    #[error("end address '{input}' is not a valid IPv4 address: {reason}")]
    MalformedEnd {
        input: String,
        #[source]
        reason: AddressError,
    },
    #[error("{start} and {end} are not in the same /24 subnet")]
    SubnetMismatch { start: Ipv4Addr, end: Ipv4Addr },
    #[error("last octet of the start address ({start}) must be lower than the end's ({end})")]
    RangeInverted { start: u8, end: u8 },
}
