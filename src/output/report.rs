//! Report data for one address and its optional subnet.

use crate::models::{Address, Subnet};
use serde::Serialize;

/// Everything printed for an address, plus its subnet when a netmask was given.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub address: Address,
    /// Numeric form of `address`.
    pub value: u32,
    /// CIDR string of `subnet`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Subnet>,
}

impl Report {
    pub fn new(address: Address, subnet: Option<Subnet>) -> Report {
        Report {
            address,
            value: address.value(),
            cidr: subnet.map(|s| s.to_string()),
            netmask: subnet.map(|s| s.netmask()),
            subnet,
        }
    }
}
