//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, pages, router
//!
//! ## Features
//! - Registration with username, password, nickname and email
//! - Login/logout with server-side sessions behind a signed cookie
//! - `require_login` gate for protected pages
//! - Localized (English / Simplified Chinese) user-facing messages
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper)
//! - Session cookie carries `<session id>.<HMAC-SHA256>`; tampered tokens count as no session
//! - Username uniqueness backed by a database constraint

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::{Envelope, Locale};
