//! User Password Value Object
//!
//! Domain wrapper over `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! // Create from registration input (length policy applies)
//! let raw = RawPassword::new("secret1".to_string()).unwrap();
//!
//! // Hash for storage
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//!
//! // Verify a later login attempt (presence check only)
//! let attempt = RawPassword::for_verification("secret1".to_string()).unwrap();
//! assert!(hashed.verify(&attempt, None));
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicy, PasswordPolicyError,
};
use std::fmt;

use crate::domain::validation::{Field, Rule, ValidationError};

/// Minimum password length for new passwords
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum password length for new passwords
pub const PASSWORD_MAX_LENGTH: usize = 20;

const POLICY: PasswordPolicy = PasswordPolicy::new(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH);

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// New password: required, 6 to 20 characters
    pub fn new(raw: String) -> Result<Self, ValidationError> {
        let clear_text = ClearTextPassword::new(raw);
        POLICY.check(&clear_text).map_err(|e| match e {
            PasswordPolicyError::Empty => ValidationError::required(Field::Password),
            PasswordPolicyError::TooShort { min, .. } => {
                ValidationError::new(Field::Password, Rule::MinLength(min))
            }
            PasswordPolicyError::TooLong { max, .. } => {
                ValidationError::new(Field::Password, Rule::MaxLength(max))
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Login attempt: only presence is checked
    pub fn for_verification(raw: String) -> Result<Self, ValidationError> {
        let clear_text = ClearTextPassword::new(raw);
        if clear_text.char_count() == 0 {
            return Err(ValidationError::required(Field::Password));
        }
        Ok(Self(clear_text))
    }

    /// Confirmation field comparison
    pub fn matches(&self, other: &RawPassword) -> bool {
        self.0.matches(&other.0)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(StoredHash);

#[derive(Clone, PartialEq, Eq)]
enum StoredHash {
    Phc(HashedPassword),
    /// Column value that is not a PHC string; never verifies
    Unrecognized(String),
}

impl UserPassword {
    /// Hash a raw password
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        Ok(Self(StoredHash::Phc(raw.0.hash(pepper)?)))
    }

    /// Create from database value
    ///
    /// Values that do not parse as PHC strings are kept so the row still
    /// loads, but no password ever verifies against them.
    pub fn from_db(value: String) -> Self {
        match HashedPassword::from_phc_string(value.as_str()) {
            Ok(hashed) => Self(StoredHash::Phc(hashed)),
            Err(_) => Self(StoredHash::Unrecognized(value)),
        }
    }

    /// Get string for database storage
    pub fn as_str(&self) -> &str {
        match &self.0 {
            StoredHash::Phc(hashed) => hashed.as_phc_string(),
            StoredHash::Unrecognized(value) => value,
        }
    }

    /// Verify a raw password against this hash
    ///
    /// ## Arguments
    /// * `raw` - The raw password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        match &self.0 {
            StoredHash::Phc(hashed) => hashed.verify(&raw.0, pepper),
            StoredHash::Unrecognized(_) => false,
        }
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
