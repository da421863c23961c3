//! Integration tests for ipv4-subnet
//!
//! These tests go through the public API the way a caller would.

use ipv4_subnet::{
    format_dot_notation, make_address, normalize_netmask, parse_dot_notation,
    models::{format_dot_notation_value, parse_dot_notation_value},
    NetmaskInput, SubnetError,
};
use serde_json::json;

#[test]
fn test_address_to_subnet_workflow() {
    let address = make_address("127.0.0.1").expect("valid address");
    assert_eq!(address.value(), 2130706433);

    for netmask in [json!(24), json!("24"), json!("255.255.255.0")] {
        let subnet = address.mask_value(&netmask).expect("valid netmask");
        assert_eq!(subnet.network().unwrap().to_string(), "127.0.0.0");
        assert_eq!(subnet.first().to_string(), "127.0.0.1");
        assert_eq!(subnet.last().to_string(), "127.0.0.254");
        assert_eq!(subnet.broadcast().unwrap().to_string(), "127.0.0.255");
        assert_eq!(subnet.size(), 256);
        assert_eq!(subnet.to_string(), "127.0.0.1/24");

        assert!(subnet.contains("127.0.0.5").unwrap());
        assert!(subnet.contains(2130706433).unwrap());
        assert!(!subnet.contains("126.255.255.255").unwrap());
    }
}

#[test]
fn test_documented_failures() {
    assert!(matches!(
        parse_dot_notation("256.1.1.1"),
        Err(SubnetError::InvalidAddress { .. })
    ));
    assert!(matches!(
        parse_dot_notation("1.2.3"),
        Err(SubnetError::InvalidAddress { .. })
    ));
    assert!(matches!(
        parse_dot_notation_value(&json!(123)),
        Err(SubnetError::TypeArgument { .. })
    ));
    assert!(matches!(
        format_dot_notation(4294967296i64),
        Err(SubnetError::InvalidAddress { .. })
    ));
    assert!(matches!(
        format_dot_notation_value(&json!({})),
        Err(SubnetError::TypeArgument { .. })
    ));
    assert!(matches!(
        normalize_netmask(&NetmaskInput::from(33)),
        Err(SubnetError::InvalidNetmask { .. })
    ));
    assert!(matches!(
        normalize_netmask(&NetmaskInput::from("abc")),
        Err(SubnetError::InvalidNetmask { .. })
    ));
    assert!(matches!(
        normalize_netmask(&NetmaskInput::from("255.0.255.0")),
        Err(SubnetError::InvalidNetmask { .. })
    ));
}

#[test]
fn test_contiguous_masks() {
    let prefix = |mask: &str| normalize_netmask(&NetmaskInput::classify(mask)).unwrap().get();
    assert_eq!(prefix("255.255.255.0"), 24);
    assert_eq!(prefix("255.255.255.255"), 32);
    assert_eq!(prefix("0.0.0.0"), 0);
}

#[test]
fn test_point_to_point_and_host_subnets() {
    let p2p = make_address("10.0.0.1").unwrap().mask(31).unwrap();
    assert!(p2p.network().is_none());
    assert!(p2p.broadcast().is_none());
    assert_eq!(p2p.size(), 2);
    assert_eq!(p2p.first().to_string(), "10.0.0.1");

    let host = make_address("10.0.0.5").unwrap().mask(32).unwrap();
    assert_eq!(host.size(), 1);
    assert_eq!(host.first(), host.last());
    assert_eq!(host.first().to_string(), "10.0.0.5");
}

#[test]
fn test_round_trip_and_ordering() {
    let samples = [0u32, 1, 0x7F000001, 0xC0A80001, 0xFFFFFFFE, u32::MAX];
    for n in samples {
        assert_eq!(parse_dot_notation(&format_dot_notation(n).unwrap()).unwrap(), n);
    }
    for pair in samples.windows(2) {
        let a = make_address(pair[0]).unwrap();
        let b = make_address(pair[1]).unwrap();
        assert_eq!(a.value() < b.value(), a < b);
        assert!(a < b);
    }
}

#[test]
fn test_report_json() {
    let report = ipv4_subnet::build_report("192.168.10.77", Some("255.255.255.192")).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&ipv4_subnet::output::to_json(&report).unwrap()).unwrap();
    assert_eq!(json["cidr"], "192.168.10.77/26");
    assert_eq!(json["subnet"]["network"], "192.168.10.64");
    assert_eq!(json["subnet"]["broadcast"], "192.168.10.127");
    assert_eq!(json["subnet"]["size"], 64);
}
