//! Auth Middleware
//!
//! Gate for pages that need a logged-in user.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use kernel::Locale;
use platform::cookie::extract_cookie;

use crate::application::CheckSessionUseCase;
use crate::domain::entity::auth_session::SessionUser;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::handlers::{AuthAppState, jump_target, moved_permanently};

/// Logged-in user, inserted into request extensions by [`require_login`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

/// Middleware that requires a valid session
///
/// Without one the request ends here with a 301 to the login page.
pub async fn require_login<R>(
    State(state): State<AuthAppState<R>>,
    locale: Locale,
    mut request: Request,
    next: Next,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_cookie(request.headers(), &state.config.session_cookie_name) else {
        return moved_permanently(jump_target("/login"));
    };

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    match use_case.execute(&token).await {
        Ok(session) => {
            request.extensions_mut().insert(CurrentUser(session.user));
            next.run(request).await
        }
        Err(AuthError::SessionInvalid) => moved_permanently(jump_target("/login")),
        Err(e) => e.into_app_error(locale).into_response(),
    }
}
