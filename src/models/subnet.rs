//! Subnet boundaries derived from an address and a prefix length.

use super::address::Address;
use super::input::AddressInput;
use super::netmask::PrefixLength;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// An address together with its prefix, and every boundary computed from them.
///
/// Prefixes below /31 have a network and broadcast address. A /31 is a
/// point-to-point pair and a /32 a single host; neither has them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subnet {
    /// The address the subnet was derived from, not network-aligned.
    address: Address,
    prefix: PrefixLength,
    size: u64,
    network: Option<Address>,
    broadcast: Option<Address>,
    first: Address,
    last: Address,
}

impl Subnet {
    /// Compute every boundary of the subnet `address` lies in for `prefix`.
    pub fn new(address: Address, prefix: PrefixLength) -> Subnet {
        let addr_bits = address.value();
        let mask = prefix.mask();
        let network_bits = addr_bits & mask;
        let size = 1u64 << prefix.host_bits();

        let subnet = match prefix.get() {
            32 => Subnet {
                address,
                prefix,
                size,
                network: None,
                broadcast: None,
                first: address,
                last: address,
            },
            31 => Subnet {
                address,
                prefix,
                size,
                network: None,
                broadcast: None,
                first: address,
                // network_bits is even, so this is the upper member of the pair
                last: Address::new(network_bits + 1),
            },
            _ => {
                let broadcast_bits = network_bits | !mask;
                Subnet {
                    address,
                    prefix,
                    size,
                    network: Some(Address::new(network_bits)),
                    broadcast: Some(Address::new(broadcast_bits)),
                    first: Address::new(network_bits + 1),
                    last: Address::new(broadcast_bits - 1),
                }
            }
        };

        log::debug!(
            "subnet {subnet}: network={:?} broadcast={:?} first={} last={} size={}",
            subnet.network.map(|a| a.to_string()),
            subnet.broadcast.map(|a| a.to_string()),
            subnet.first,
            subnet.last,
            subnet.size
        );
        subnet
    }

    /// The original address, as passed to [`Subnet::new`].
    pub fn address(&self) -> Address {
        self.address
    }

    /// The normalized prefix length.
    pub fn prefix(&self) -> PrefixLength {
        self.prefix
    }

    /// Number of addresses, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Network address, absent for /31 and /32.
    pub fn network(&self) -> Option<Address> {
        self.network
    }

    /// Broadcast address, absent for /31 and /32.
    pub fn broadcast(&self) -> Option<Address> {
        self.broadcast
    }

    /// First usable host.
    pub fn first(&self) -> Address {
        self.first
    }

    /// Last usable host.
    pub fn last(&self) -> Address {
        self.last
    }

    /// The subnet mask in dot notation, e.g. `255.255.255.0` for a /24.
    pub fn netmask(&self) -> Address {
        self.prefix.netmask()
    }

    /// Check if an address is within this subnet, broadcast included.
    ///
    /// The candidate goes through the same validation as [`crate::make_address`].
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::make_address;
    /// let subnet = make_address("127.0.0.1").unwrap().mask(24).unwrap();
    /// assert!(subnet.contains("127.0.0.255").unwrap());
    /// assert!(!subnet.contains("126.255.255.255").unwrap());
    /// ```
    pub fn contains(&self, value: impl Into<AddressInput>) -> Result<bool> {
        let candidate = Address::from_input(value.into())?;
        Ok(self.contains_address(candidate))
    }

    /// [`Subnet::contains`] for a candidate held in a JSON value.
    pub fn contains_value(&self, value: &Value) -> Result<bool> {
        let candidate = Address::try_from(value)?;
        Ok(self.contains_address(candidate))
    }

    /// Range check for an already validated address.
    pub fn contains_address(&self, candidate: Address) -> bool {
        match (self.network, self.broadcast) {
            (Some(network), Some(broadcast)) => network <= candidate && candidate <= broadcast,
            _ => self.first <= candidate && candidate <= self.last,
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}
