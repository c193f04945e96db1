//! Domain Layer
//!
//! Contains entities, value objects, validation errors and repository traits.

pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_session::{AuthSession, SessionUser},
    user::{NewUser, User},
};
pub use repository::{AuthSessionRepository, UserRepository};
pub use validation::{Field, Rule, ValidationError};
