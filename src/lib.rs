//! IPv4 address parsing, formatting and subnet arithmetic.
//!
//! ```
//! use ipv4_subnet::make_address;
//!
//! let subnet = make_address("127.0.0.1").unwrap().mask("255.255.255.0").unwrap();
//! assert_eq!(subnet.network().unwrap().to_string(), "127.0.0.0");
//! assert_eq!(subnet.broadcast().unwrap().to_string(), "127.0.0.255");
//! assert!(subnet.contains(2130706433).unwrap());
//! ```

pub mod error;
pub mod models;
pub mod output;

pub use error::{Result, SubnetError};
pub use models::{
    format_dot_notation, make_address, normalize_netmask, parse_dot_notation, Address,
    AddressInput, NetmaskInput, PrefixLength, Subnet,
};

use output::Report;

/// Build the report for a command-line address, and its subnet if a netmask is given.
pub fn build_report(address: &str, netmask: Option<&str>) -> Result<Report> {
    let address = Address::from_input(AddressInput::from_arg(address)?)?;
    let subnet = netmask
        .map(|netmask| address.mask(NetmaskInput::classify(netmask)))
        .transpose()?;
    Ok(Report::new(address, subnet))
}

/// Check whether `candidate` lies in the subnet of `address` and `netmask`.
pub fn check_contains(address: &str, netmask: &str, candidate: &str) -> Result<bool> {
    let subnet = make_address(AddressInput::from_arg(address)?)?.mask(netmask)?;
    let found = subnet.contains(AddressInput::from_arg(candidate)?)?;
    log::info!("{candidate} in {subnet}: {found}");
    Ok(found)
}
