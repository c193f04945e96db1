//! HTTP Handlers

use axum::Extension;
use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::{Envelope, Locale};
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{JumpData, LoginData, LoginForm, RegisterForm};
use crate::presentation::middleware::CurrentUser;
use crate::presentation::{messages, pages};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Pages
// ============================================================================

/// Any method but POST on /login
pub async fn login_page(locale: Locale) -> Html<String> {
    pages::login_page(locale)
}

/// Any method but POST on /register
pub async fn register_page(locale: Locale) -> Html<String> {
    pages::register_page(locale)
}

/// ANY /reset-password
pub async fn reset_password_page(locale: Locale) -> Html<String> {
    pages::reset_password_page(locale)
}

/// GET /index (behind `require_login`)
pub async fn index(
    locale: Locale,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Html<String> {
    pages::index_page(locale, &user)
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    locale: Locale,
    headers: HeaderMap,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Form(form) = form.map_err(|e| invalid_form(e, locale))?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(SignInInput {
            user_name: form.username,
            password: form.password,
        })
        .await
        .map_err(|e| e.into_app_error(locale))?;

    // The browser's previous session ends once the new one exists
    if let Some(previous) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let sign_out = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        if let Err(e) = sign_out.execute(&previous).await {
            e.log();
        }
    }

    let cookie = set_cookie_header(&state.config.cookie_config(), &output.session_token)
        .map_err(|e| AuthError::Internal(e.to_string()).into_app_error(locale))?;

    let body = Envelope::success(
        messages::login_success(locale),
        LoginData::new(output.user, jump_target("/index")),
    );

    Ok(([(header::SET_COOKIE, cookie)], body).into_response())
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    locale: Locale,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<Envelope<JumpData>, AppError>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Form(form) = form.map_err(|e| invalid_form(e, locale))?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(SignUpInput {
            user_name: form.username,
            password: form.password,
            confirm_password: form.confirm_password,
            nickname: form.nickname,
            email: form.email,
        })
        .await
        .map_err(|e| e.into_app_error(locale))?;

    Ok(Envelope::success(
        messages::register_success(locale),
        JumpData {
            jump: jump_target("/login"),
        },
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Always clears the cookie and redirects, even when the store fails.
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        if let Err(e) = use_case.execute(&token).await {
            e.log();
        }
    }

    let mut response = moved_permanently(jump_target("/login"));
    match delete_cookie_header(&state.config.cookie_config()) {
        Ok(cookie) => {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
        Err(e) => tracing::error!(error = %e, "Failed to build session cookie header"),
    }
    response
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Cache-busted redirect target, e.g. `/index?rand=1700000000000000000`
pub(crate) fn jump_target(path: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{path}?rand={nanos}")
}

/// `301 Moved Permanently` (axum's `Redirect::permanent` answers 308)
pub(crate) fn moved_permanently(location: String) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

fn invalid_form(rejection: FormRejection, locale: Locale) -> AppError {
    tracing::debug!(error = %rejection, "Form rejected");
    AppError::bad_request(messages::invalid_form(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_target() {
        let jump = jump_target("/index");
        let rand = jump.strip_prefix("/index?rand=").unwrap();
        assert!(rand.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn test_moved_permanently() {
        let response = moved_permanently("/login?rand=1".to_string());
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "/login?rand=1");
    }
}
