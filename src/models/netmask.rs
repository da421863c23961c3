//! Netmask normalization to a prefix length.

use super::address::Address;
use super::input::NetmaskInput;
use super::notation::parse_dot_notation;
use crate::error::{Result, SubnetError};
use serde::Serialize;
use std::fmt;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

const PREFIX_RULE: &str = "prefix length must be an integer in 0..=32";

/// Number of leading one-bits in a netmask, always in 0..=32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Validate a prefix length.
    pub fn new(len: u8) -> Result<PrefixLength> {
        if len > MAX_LENGTH {
            Err(SubnetError::invalid_netmask(len, PREFIX_RULE))
        } else {
            Ok(PrefixLength(len))
        }
    }

    /// The prefix length as a plain number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - prefix`.
    pub const fn host_bits(self) -> u32 {
        (MAX_LENGTH - self.0) as u32
    }

    /// The subnet mask as a `u32`.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::models::PrefixLength;
    /// assert_eq!(PrefixLength::new(24).unwrap().mask(), 0xFFFFFF00);
    /// assert_eq!(PrefixLength::new(0).unwrap().mask(), 0);
    /// ```
    pub const fn mask(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            u32::MAX << self.host_bits()
        }
    }

    /// The subnet mask in dot notation form.
    pub const fn netmask(self) -> Address {
        Address::new(self.mask())
    }
}

impl TryFrom<i64> for PrefixLength {
    type Error = SubnetError;

    fn try_from(len: i64) -> Result<Self> {
        u8::try_from(len)
            .map_err(|_| SubnetError::invalid_netmask(len, PREFIX_RULE))
            .and_then(PrefixLength::new)
    }
}

impl From<PrefixLength> for u8 {
    fn from(prefix: PrefixLength) -> u8 {
        prefix.0
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reduce a netmask in any accepted shape to its prefix length.
///
/// # Examples
/// ```
/// use ipv4_subnet::models::{normalize_netmask, NetmaskInput};
/// let prefix = normalize_netmask(&NetmaskInput::classify("255.255.255.0")).unwrap();
/// assert_eq!(prefix.get(), 24);
/// ```
pub fn normalize_netmask(input: &NetmaskInput) -> Result<PrefixLength> {
    let prefix = match input {
        NetmaskInput::PrefixNumber(len) => PrefixLength::try_from(*len),
        NetmaskInput::PrefixString(text) => prefix_from_str(text),
        NetmaskInput::DottedMask(text) => prefix_from_dotted(text),
    };
    match &prefix {
        Ok(prefix) => log::trace!("normalized netmask {input} to /{prefix}"),
        Err(e) => log::debug!("rejected netmask: {e}"),
    }
    prefix
}

fn prefix_from_str(text: &str) -> Result<PrefixLength> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::invalid_netmask(text, PREFIX_RULE));
    }
    text.parse::<u8>()
        .map_err(|_| SubnetError::invalid_netmask(text, PREFIX_RULE))
        .and_then(|len| {
            PrefixLength::new(len).map_err(|_| SubnetError::invalid_netmask(text, PREFIX_RULE))
        })
}

/// All one-bits must precede all zero-bits.
fn prefix_from_dotted(text: &str) -> Result<PrefixLength> {
    let mask = parse_dot_notation(text).map_err(|e| {
        let reason = match e {
            SubnetError::InvalidAddress { reason, .. } => reason,
            other => other.to_string(),
        };
        SubnetError::invalid_netmask(text, format!("not a dotted-decimal mask, {reason}"))
    })?;

    let ones = mask.leading_ones();
    if mask.checked_shl(ones).unwrap_or(0) != 0 {
        return Err(SubnetError::invalid_netmask(
            text,
            "one-bits and zero-bits are interleaved",
        ));
    }
    PrefixLength::new(ones as u8)
}
