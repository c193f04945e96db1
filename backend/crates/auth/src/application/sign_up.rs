//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    nickname::Nickname,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input (raw form fields)
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    pub confirm_password: String,
    pub nickname: String,
    pub email: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Field rules in declared order; the first failure wins
        let user_name = UserName::new(&input.user_name)?;
        let raw_password = RawPassword::new(input.password)?;
        let nickname = Nickname::new(&input.nickname)?;
        let email = Email::new(&input.email)?;

        let confirm_password = RawPassword::for_verification(input.confirm_password);
        if !confirm_password.is_ok_and(|confirm| raw_password.matches(&confirm)) {
            return Err(AuthError::PasswordMismatch);
        }

        // Check if user name is taken
        if self.user_repo.count_by_user_name(&user_name).await? > 0 {
            return Err(AuthError::UserNameTaken);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // The unique constraint still catches a concurrent registration
        let user = self
            .user_repo
            .create(&NewUser::new(user_name, password, nickname, email))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}
