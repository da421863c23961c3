//! Conversion between dot-decimal notation and the 32-bit numeric form.

use super::input::{integer_of, type_name};
use crate::error::{Result, SubnetError};
use serde_json::Value;
use std::fmt::Display;

/// Number of octets in an IPv4 address.
pub const OCTETS: usize = 4;

pub(crate) const RANGE_RULE: &str = "number is outside 0..=4294967295";

/// Parse dot notation (e.g. "10.0.0.1") into its numeric value.
///
/// Exactly four `.`-separated decimal octets in 0..=255 are required.
/// Leading zeros are accepted, signs and whitespace are not.
///
/// # Examples
/// ```
/// use ipv4_subnet::models::parse_dot_notation;
/// assert_eq!(parse_dot_notation("127.0.0.1").unwrap(), 2130706433);
/// ```
pub fn parse_dot_notation(text: &str) -> Result<u32> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != OCTETS {
        return Err(SubnetError::invalid_address(
            text,
            format!("expected {OCTETS} octets, found {}", segments.len()),
        ));
    }

    let value = segments
        .iter()
        .enumerate()
        .try_fold(0u32, |acc, (i, segment)| {
            let octet = parse_octet(segment).map_err(|reason| {
                SubnetError::invalid_address(text, format!("octet {}: {reason}", i + 1))
            })?;
            Ok::<u32, SubnetError>(acc * 256 + u32::from(octet))
        })?;

    log::trace!("parsed {text} as {value}");
    Ok(value)
}

fn parse_octet(segment: &str) -> std::result::Result<u8, String> {
    if segment.is_empty() {
        return Err("empty".to_string());
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{segment:?} is not a decimal integer"));
    }
    segment
        .parse::<u32>()
        .ok()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| format!("{segment} is outside 0..=255"))
}

/// Format a number as dot notation after checking it is an address.
///
/// # Examples
/// ```
/// use ipv4_subnet::models::format_dot_notation;
/// assert_eq!(format_dot_notation(2130706433).unwrap(), "127.0.0.1");
/// assert!(format_dot_notation(4294967296i64).is_err());
/// ```
pub fn format_dot_notation<N>(number: N) -> Result<String>
where
    N: TryInto<u32> + Display + Copy,
{
    let value: u32 = number
        .try_into()
        .map_err(|_| SubnetError::invalid_address(number, RANGE_RULE))?;
    Ok(to_dot_notation(value))
}

/// Render a `u32` as four octets, most significant first.
pub fn to_dot_notation(value: u32) -> String {
    let mut octets = [0u32; OCTETS];
    let mut rest = value;
    for octet in octets.iter_mut().rev() {
        *octet = rest % 256;
        rest /= 256;
    }
    octets
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// [`parse_dot_notation`] over a loosely typed value; only strings are accepted.
pub fn parse_dot_notation_value(value: &Value) -> Result<u32> {
    match value {
        Value::String(text) => parse_dot_notation(text),
        other => Err(SubnetError::TypeArgument {
            expected: "string",
            found: type_name(other).to_string(),
        }),
    }
}

/// [`format_dot_notation`] over a loosely typed value; only integers are accepted.
pub fn format_dot_notation_value(value: &Value) -> Result<String> {
    let integer = match value {
        Value::Number(number) => integer_of(number).ok_or_else(|| SubnetError::TypeArgument {
            expected: "integer",
            found: format!("non-integral number {number}"),
        })?,
        other => {
            return Err(SubnetError::TypeArgument {
                expected: "integer",
                found: type_name(other).to_string(),
            })
        }
    };
    format_dot_notation(integer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_dot_notation() {
        assert_eq!(parse_dot_notation("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_dot_notation("127.0.0.1").unwrap(), 2130706433);
        assert_eq!(parse_dot_notation("192.168.1.42").unwrap(), 0xC0A8012A);
        assert_eq!(parse_dot_notation("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn test_parse_rejects_bad_octets() {
        for bad in [
            "256.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "1..3.4",
            "a.b.c.d",
            "1.2.3.-4",
            "1.2.3.+4",
            " 1.2.3.4",
            "1.2.3.4 ",
            "",
            "1.2.3.99999999999999999999",
        ] {
            assert!(
                matches!(parse_dot_notation(bad), Err(SubnetError::InvalidAddress { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_error_names_rule() {
        let err = parse_dot_notation("1.2.3").unwrap_err();
        assert_eq!(
            err,
            SubnetError::InvalidAddress {
                input: "1.2.3".to_string(),
                reason: "expected 4 octets, found 3".to_string()
            }
        );
        let err = parse_dot_notation("256.1.1.1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid address \"256.1.1.1\": octet 1: 256 is outside 0..=255"
        );
    }

    #[test]
    fn test_leading_zeros_canonicalize() {
        let value = parse_dot_notation("127.00.0.001").unwrap();
        assert_eq!(to_dot_notation(value), "127.0.0.1");
    }

    #[test]
    fn test_format_dot_notation() {
        assert_eq!(format_dot_notation(0).unwrap(), "0.0.0.0");
        assert_eq!(format_dot_notation(2130706433).unwrap(), "127.0.0.1");
        assert_eq!(
            format_dot_notation(4294967295u32).unwrap(),
            "255.255.255.255"
        );
        assert!(matches!(
            format_dot_notation(4294967296i64),
            Err(SubnetError::InvalidAddress { .. })
        ));
        assert!(matches!(
            format_dot_notation(-1),
            Err(SubnetError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_round_trip_samples() {
        for n in [0u32, 1, 255, 256, 65535, 16777216, 2130706433, 0xDEADBEEF, u32::MAX] {
            assert_eq!(parse_dot_notation(&to_dot_notation(n)).unwrap(), n);
        }
        let mut n: u32 = 7;
        for _ in 0..10_000 {
            n = n.wrapping_mul(2654435761).wrapping_add(12345);
            assert_eq!(parse_dot_notation(&to_dot_notation(n)).unwrap(), n);
        }
    }

    #[test]
    fn test_value_type_contract() {
        assert_eq!(parse_dot_notation_value(&json!("10.0.0.1")).unwrap(), 167772161);
        assert!(matches!(
            parse_dot_notation_value(&json!(123)),
            Err(SubnetError::TypeArgument { expected: "string", .. })
        ));
        assert_eq!(format_dot_notation_value(&json!(167772161)).unwrap(), "10.0.0.1");
        assert!(matches!(
            format_dot_notation_value(&json!("10.0.0.1")),
            Err(SubnetError::TypeArgument { expected: "integer", .. })
        ));
        assert!(matches!(
            format_dot_notation_value(&json!(1.25)),
            Err(SubnetError::TypeArgument { .. })
        ));
        assert!(matches!(
            format_dot_notation_value(&json!(4294967296u64)),
            Err(SubnetError::InvalidAddress { .. })
        ));
    }
}
