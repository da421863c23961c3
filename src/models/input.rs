//! Classification of caller-supplied values.
//!
//! Addresses and netmasks arrive as strings, integers or loosely typed JSON
//! values. They are resolved here, once, into [`AddressInput`] and
//! [`NetmaskInput`] so the conversion code only ever matches on a closed enum.

use super::address::Address;
use super::netmask::PrefixLength;
use crate::error::{Result, SubnetError};
use serde_json::{Number, Value};

/// An address as handed in by a caller: dot notation or a plain number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Dot-decimal text, e.g. `"127.0.0.1"`.
    Text(String),
    /// Numeric form, range-checked on conversion.
    Number(i64),
}

impl AddressInput {
    /// Classify a command-line argument.
    ///
    /// An argument made only of ASCII digits is a numeric address, anything
    /// else is treated as dot notation.
    pub fn from_arg(arg: &str) -> Result<AddressInput> {
        if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
            let number = arg
                .parse::<i64>()
                .map_err(|_| SubnetError::invalid_address(arg, super::notation::RANGE_RULE))?;
            Ok(AddressInput::Number(number))
        } else {
            Ok(AddressInput::Text(arg.to_string()))
        }
    }
}

impl From<&str> for AddressInput {
    fn from(text: &str) -> Self {
        AddressInput::Text(text.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(text: String) -> Self {
        AddressInput::Text(text)
    }
}

impl From<&String> for AddressInput {
    fn from(text: &String) -> Self {
        AddressInput::Text(text.clone())
    }
}

impl From<i32> for AddressInput {
    fn from(number: i32) -> Self {
        AddressInput::Number(i64::from(number))
    }
}

impl From<i64> for AddressInput {
    fn from(number: i64) -> Self {
        AddressInput::Number(number)
    }
}

impl From<u32> for AddressInput {
    fn from(number: u32) -> Self {
        AddressInput::Number(i64::from(number))
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        AddressInput::Number(i64::from(address.value()))
    }
}

impl TryFrom<&Value> for AddressInput {
    type Error = SubnetError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(AddressInput::Text(text.clone())),
            Value::Number(number) => {
                let integer = integer_of(number).ok_or_else(|| SubnetError::TypeArgument {
                    expected: "string or integer",
                    found: format!("non-integral number {number}"),
                })?;
                let integer = i64::try_from(integer).map_err(|_| {
                    SubnetError::invalid_address(integer, super::notation::RANGE_RULE)
                })?;
                Ok(AddressInput::Number(integer))
            }
            other => Err(SubnetError::TypeArgument {
                expected: "string or integer",
                found: type_name(other).to_string(),
            }),
        }
    }
}

/// A netmask in one of its three accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetmaskInput {
    /// A prefix length given as a number.
    PrefixNumber(i64),
    /// A prefix length given as text without any `.`, e.g. `"24"`.
    PrefixString(String),
    /// A dotted-decimal mask, e.g. `"255.255.255.0"`.
    DottedMask(String),
}

impl NetmaskInput {
    /// Decide which shape a textual netmask has.
    pub fn classify(text: &str) -> NetmaskInput {
        if text.contains('.') {
            NetmaskInput::DottedMask(text.to_string())
        } else {
            NetmaskInput::PrefixString(text.to_string())
        }
    }
}

impl std::fmt::Display for NetmaskInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NetmaskInput::PrefixNumber(n) => write!(f, "{n}"),
            NetmaskInput::PrefixString(s) | NetmaskInput::DottedMask(s) => f.write_str(s),
        }
    }
}

impl From<&str> for NetmaskInput {
    fn from(text: &str) -> Self {
        NetmaskInput::classify(text)
    }
}

impl From<String> for NetmaskInput {
    fn from(text: String) -> Self {
        NetmaskInput::classify(&text)
    }
}

impl From<&String> for NetmaskInput {
    fn from(text: &String) -> Self {
        NetmaskInput::classify(text)
    }
}

impl From<u8> for NetmaskInput {
    fn from(prefix: u8) -> Self {
        NetmaskInput::PrefixNumber(i64::from(prefix))
    }
}

impl From<i32> for NetmaskInput {
    fn from(prefix: i32) -> Self {
        NetmaskInput::PrefixNumber(i64::from(prefix))
    }
}

impl From<u32> for NetmaskInput {
    fn from(prefix: u32) -> Self {
        NetmaskInput::PrefixNumber(i64::from(prefix))
    }
}

impl From<i64> for NetmaskInput {
    fn from(prefix: i64) -> Self {
        NetmaskInput::PrefixNumber(prefix)
    }
}

impl From<PrefixLength> for NetmaskInput {
    fn from(prefix: PrefixLength) -> Self {
        NetmaskInput::PrefixNumber(i64::from(prefix.get()))
    }
}

impl TryFrom<&Value> for NetmaskInput {
    type Error = SubnetError;

    /// Any shape other than a string or an integer is an invalid netmask.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(NetmaskInput::classify(text)),
            Value::Number(number) => integer_of(number)
                .and_then(|n| i64::try_from(n).ok())
                .map(NetmaskInput::PrefixNumber)
                .ok_or_else(|| SubnetError::invalid_netmask(number, "not an integer in 0..=32")),
            other => Err(SubnetError::invalid_netmask(
                other,
                format!("a {} is not a netmask", type_name(other)),
            )),
        }
    }
}

/// Integer value of a JSON number, including integral floats like `24.0`.
pub(crate) fn integer_of(number: &Number) -> Option<i128> {
    if let Some(n) = number.as_i64() {
        return Some(i128::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Some(i128::from(n));
    }
    number.as_f64().and_then(integral_f64)
}

/// Integer value of a float with no fractional part.
pub(crate) fn integral_f64(f: f64) -> Option<i128> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 1e30).then_some(f as i128)
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
