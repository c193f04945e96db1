//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the web service vocabulary:
//! - The unified error type and its HTTP classification
//! - The `{code, message, data}` JSON envelope every form endpoint answers with
//! - The response locale negotiated from `Accept-Language`
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod envelope;
pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod locale;

pub use envelope::Envelope;
pub use locale::Locale;
