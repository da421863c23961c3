//! Error type shared by every conversion and subnet operation.

/// Errors returned while validating addresses, netmasks and their inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    /// A value of the wrong fundamental type was supplied.
    #[error("expected {expected}, found {found}")]
    TypeArgument {
        expected: &'static str,
        found: String,
    },

    /// Dot notation failed to parse, or a number is outside 0..=4294967295.
    #[error("invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: String },

    /// A netmask failed its shape, range or contiguity check.
    #[error("invalid netmask {input:?}: {reason}")]
    InvalidNetmask { input: String, reason: String },
}

impl SubnetError {
    pub(crate) fn invalid_address(input: impl ToString, reason: impl Into<String>) -> Self {
        SubnetError::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_netmask(input: impl ToString, reason: impl Into<String>) -> Self {
        SubnetError::InvalidNetmask {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;
