//! Address and subnet value types.
//!
//! - [`notation`] - dot notation to and from `u32`
//! - [`netmask`] - netmask normalization to a [`PrefixLength`]
//! - [`Address`] - a validated IPv4 address
//! - [`Subnet`] - boundaries of the subnet an address lies in
//! - [`input`] - classification of loosely typed caller input

mod address;
pub mod input;
pub mod netmask;
pub mod notation;
mod subnet;

// Re-export public types
pub use address::{make_address, Address};
pub use input::{AddressInput, NetmaskInput};
pub use netmask::{normalize_netmask, PrefixLength, MAX_LENGTH};
pub use notation::{
    format_dot_notation, format_dot_notation_value, parse_dot_notation, parse_dot_notation_value,
    to_dot_notation,
};
pub use subnet::Subnet;
