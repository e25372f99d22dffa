use core::fmt::{self, Display};

use super::RESERVED_CODE;

/// Reasons a [`MapRegistry`](super::MapRegistry) refuses a coder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The coder used the reserved code.
    Reserved,
    /// The code is already registered.
    Duplicate { code: u32 },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserved => write!(f, "code {} is reserved and cannot be registered", RESERVED_CODE),
            Self::Duplicate { code } => write!(f, "code {} is already registered", code),
        }
    }
}

impl core::error::Error for RegistryError {}
