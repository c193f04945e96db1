//! Presentation Layer
//!
//! HTTP handlers, DTOs, pages, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod messages;
pub mod middleware;
pub mod pages;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, require_login};
pub use router::{auth_router, auth_router_generic};
