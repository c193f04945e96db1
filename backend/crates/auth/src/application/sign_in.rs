//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::fmt;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::{AuthSession, SessionUser};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input (raw form fields)
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    /// Snapshot stored with the session
    pub user: SessionUser,
}

impl fmt::Debug for SignInOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInOutput")
            .field("session_token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_name = UserName::new(&input.user_name)?;
        let raw_password = RawPassword::for_verification(input.password)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Check if user can login
        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        if !user.password.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::PasswordIncorrect);
        }

        // Create session
        let session = AuthSession::new(SessionUser::from(&user), self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = session_token::sign(session.session_id, &self.config.session_secret)?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user: session.user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::domain::value_object::activation::Activation;
    use crate::infra::memory::MemoryAuthRepository;

    async fn setup() -> (MemoryAuthRepository, Arc<AuthConfig>) {
        let repo = MemoryAuthRepository::new();
        let config = Arc::new(AuthConfig::development());
        SignUpUseCase::new(Arc::new(repo.clone()), config.clone())
            .execute(SignUpInput {
                user_name: "alice".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
                nickname: "A".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap();
        (repo, config)
    }

    fn sign_in(
        repo: &MemoryAuthRepository,
        config: &Arc<AuthConfig>,
    ) -> SignInUseCase<MemoryAuthRepository, MemoryAuthRepository> {
        let repo = Arc::new(repo.clone());
        SignInUseCase::new(repo.clone(), repo, config.clone())
    }

    fn input(user_name: &str, password: &str) -> SignInInput {
        SignInInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let (repo, config) = setup().await;
        let output = sign_in(&repo, &config)
            .execute(input("alice", "secret1"))
            .await
            .unwrap();

        assert_eq!(output.user.username.as_str(), "alice");
        assert_eq!(output.user.email.as_str(), "a@x.com");

        let session_id = session_token::verify(&output.session_token, &config.session_secret)
            .expect("token should verify");
        assert!(repo.has_session(session_id));
    }

    #[tokio::test]
    async fn test_wrong_password_creates_no_session() {
        let (repo, config) = setup().await;
        let err = sign_in(&repo, &config)
            .execute(input("alice", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordIncorrect));
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (repo, config) = setup().await;
        let err = sign_in(&repo, &config)
            .execute(input("bob", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_disabled_account_rejected_even_with_correct_password() {
        let (repo, config) = setup().await;
        repo.set_activation("alice", Activation::Disabled);

        for password in ["secret1", "wrong"] {
            let err = sign_in(&repo, &config)
                .execute(input("alice", password))
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::AccountDisabled));
        }
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_output_debug_hides_token() {
        let (repo, config) = setup().await;
        let output = sign_in(&repo, &config)
            .execute(input("alice", "secret1"))
            .await
            .unwrap();

        let debug = format!("{output:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&output.session_token));
    }

    #[tokio::test]
    async fn test_empty_fields_fail_validation() {
        let (repo, config) = setup().await;
        let err = sign_in(&repo, &config)
            .execute(input("alice", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
    }
}
