//! Activation Flag
//!
//! Stored as `gc_users.activate`. Only `1` means enabled; every other value
//! is treated as disabled.

use serde::Serialize;
use std::fmt;

/// Account activation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum Activation {
    /// Cannot log in
    Disabled = 0,
    /// Normal account (set at registration)
    #[default]
    Enabled = 1,
}

impl Activation {
    /// Numeric value for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Read the database value
    #[inline]
    pub const fn from_db(value: i16) -> Self {
        match value {
            1 => Self::Enabled,
            _ => Self::Disabled,
        }
    }

    #[inline]
    pub const fn can_login(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => f.write_str("enabled"),
            Self::Disabled => f.write_str("disabled"),
        }
    }
}
