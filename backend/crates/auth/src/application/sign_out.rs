//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign out from the session behind `session_token`
    ///
    /// Unknown, already deleted or tampered tokens are a no-op.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let Some(session_id) = session_token::verify(session_token, &self.config.session_secret)
        else {
            tracing::debug!("Sign out with unverifiable token ignored");
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::auth_session::{AuthSession, SessionUser};
    use crate::domain::value_object::{
        email::Email, nickname::Nickname, user_id::UserId, user_name::UserName,
    };
    use crate::infra::memory::MemoryAuthRepository;

    fn session() -> AuthSession {
        AuthSession::new(
            SessionUser {
                id: UserId::new(1),
                username: UserName::from_db("alice"),
                nickname: Nickname::from_db("A"),
                email: Email::from_db("a@x.com"),
            },
            None,
        )
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let repo = MemoryAuthRepository::new();
        let config = Arc::new(AuthConfig::development());
        let session = session();
        repo.insert_session(session.clone());

        let token = session_token::sign(session.session_id, &config.session_secret).unwrap();
        let use_case = SignOutUseCase::new(Arc::new(repo.clone()), config);

        use_case.execute(&token).await.unwrap();
        assert_eq!(repo.session_count(), 0);

        // Second logout is a no-op
        use_case.execute(&token).await.unwrap();
    }

    #[tokio::test]
    async fn test_tampered_token_is_ignored() {
        let repo = MemoryAuthRepository::new();
        let session = session();
        repo.insert_session(session.clone());

        let use_case = SignOutUseCase::new(Arc::new(repo.clone()), Arc::new(AuthConfig::development()));
        use_case
            .execute(&format!("{}.forged", session.session_id))
            .await
            .unwrap();

        assert_eq!(repo.session_count(), 1);
    }
}
