//! Validated IPv4 address value.

use super::input::{integral_f64, AddressInput, NetmaskInput};
use super::netmask::normalize_netmask;
use super::notation::{parse_dot_notation, to_dot_notation, RANGE_RULE};
use super::subnet::Subnet;
use crate::error::{Result, SubnetError};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address held in its numeric form.
///
/// Equality and ordering follow the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u32);

/// Build an [`Address`] from dot notation or a number.
///
/// # Examples
/// ```
/// use ipv4_subnet::make_address;
/// let a = make_address("127.0.0.1").unwrap();
/// let b = make_address(2130706433).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "127.0.0.1");
/// ```
pub fn make_address(value: impl Into<AddressInput>) -> Result<Address> {
    Address::from_input(value.into())
}

impl Address {
    /// Wrap a numeric value; every `u32` is a valid address.
    pub const fn new(value: u32) -> Address {
        Address(value)
    }

    /// Validate classified input: parse text, range-check numbers.
    pub fn from_input(input: AddressInput) -> Result<Address> {
        match input {
            AddressInput::Text(text) => parse_dot_notation(&text).map(Address),
            AddressInput::Number(number) => u32::try_from(number)
                .map(Address)
                .map_err(|_| SubnetError::invalid_address(number, RANGE_RULE)),
        }
    }

    /// The numeric value, 0..=4294967295.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The four octets, most significant first.
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Derive the subnet this address lies in for the given netmask.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::make_address;
    /// let subnet = make_address("127.0.0.1").unwrap().mask("255.255.255.0").unwrap();
    /// assert_eq!(subnet.to_string(), "127.0.0.1/24");
    /// ```
    pub fn mask(self, netmask: impl Into<NetmaskInput>) -> Result<Subnet> {
        let prefix = normalize_netmask(&netmask.into())?;
        Ok(Subnet::new(self, prefix))
    }

    /// [`Address::mask`] for a netmask held in a JSON value.
    pub fn mask_value(self, netmask: &Value) -> Result<Subnet> {
        self.mask(NetmaskInput::try_from(netmask)?)
    }
}

impl TryFrom<&Value> for Address {
    type Error = SubnetError;

    fn try_from(value: &Value) -> Result<Self> {
        Address::from_input(AddressInput::try_from(value)?)
    }
}

impl FromStr for Address {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        parse_dot_notation(s).map(Address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_dot_notation(self.0))
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Address {
        Address(value)
    }
}

impl From<Address> for u32 {
    fn from(address: Address) -> u32 {
        address.0
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(address: Address) -> Ipv4Addr {
        Ipv4Addr::from(address.0)
    }
}

impl PartialEq<u32> for Address {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<u32> for Address {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        Some(self.0.cmp(other))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct AddressVisitor;

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an IPv4 address in dot notation or as an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Address, E> {
        v.parse().map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Address, E> {
        let number = i64::try_from(v)
            .map_err(|_| de::Error::custom(SubnetError::invalid_address(v, RANGE_RULE)))?;
        self.visit_i64(number)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Address, E> {
        let integer = integral_f64(v).ok_or_else(|| {
            de::Error::custom(SubnetError::TypeArgument {
                expected: "string or integer",
                found: format!("non-integral number {v}"),
            })
        })?;
        let number = i64::try_from(integer)
            .map_err(|_| de::Error::custom(SubnetError::invalid_address(integer, RANGE_RULE)))?;
        self.visit_i64(number)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Address, E> {
        Address::from_input(AddressInput::Number(v)).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AddressVisitor)
    }
}
