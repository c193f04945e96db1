//! Nickname Value Object

use serde::Serialize;
use std::fmt;

use crate::domain::validation::{Field, Rule, ValidationError};

/// Maximum nickname length (in characters)
pub const NICKNAME_MAX_LENGTH: usize = 15;

/// Display name shown on the index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::required(Field::Nickname));
        }
        if trimmed.chars().count() > NICKNAME_MAX_LENGTH {
            return Err(ValidationError::new(
                Field::Nickname,
                Rule::MaxLength(NICKNAME_MAX_LENGTH),
            ));
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
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
