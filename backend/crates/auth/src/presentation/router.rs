//! Auth Router

use axum::{
    Router, middleware,
    routing::{any, get},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_login;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/index", get(handlers::index))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_login::<R>,
        ));

    Router::new()
        .route(
            "/login",
            get(handlers::login_page)
                .post(handlers::login::<R>)
                .fallback(handlers::login_page),
        )
        .route(
            "/register",
            get(handlers::register_page)
                .post(handlers::register::<R>)
                .fallback(handlers::register_page),
        )
        .route("/reset-password", any(handlers::reset_password_page))
        .route("/logout", get(handlers::logout::<R>))
        .merge(protected)
        .with_state(state)
}
