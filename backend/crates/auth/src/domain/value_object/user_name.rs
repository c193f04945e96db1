//! User Name Value Object
//!
//! The login handle. Input is trimmed and must not be empty; matching is
//! exact and case-sensitive.

use serde::Serialize;
use std::fmt;

use crate::domain::validation::{Field, ValidationError};

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Validate form input
    ///
    /// ## Examples
    /// ```rust
    /// use auth::domain::value_object::user_name::UserName;
    ///
    /// assert_eq!(UserName::new("  alice ").unwrap().as_str(), "alice");
    /// assert!(UserName::new("   ").is_err());
    /// ```
    pub fn new(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::required(Field::UserName));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserName({})", self.0)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
