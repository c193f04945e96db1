//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::borrow::Cow;

use kernel::Locale;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A form field broke a rule
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Registration password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Account is disabled
    #[error("Account is disabled")]
    AccountDisabled,

    /// Wrong password
    #[error("Password incorrect")]
    PasswordIncorrect,

    /// Session not found, expired, or token tampered
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::PasswordMismatch => ErrorKind::BadRequest,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::AccountDisabled => ErrorKind::Forbidden,
            AuthError::PasswordIncorrect | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// User-facing message
    ///
    /// Infrastructure failures get a generic message; details stay in the log.
    pub fn message(&self, locale: Locale) -> Cow<'static, str> {
        let text = match (self, locale) {
            (AuthError::Validation(e), _) => return Cow::Owned(e.message(locale)),
            (AuthError::PasswordMismatch, Locale::En) => "Passwords do not match",
            (AuthError::PasswordMismatch, Locale::Zh) => "两次密码输入不一致",
            (AuthError::UserNotFound, Locale::En) => "This user does not exist, please check.",
            (AuthError::UserNotFound, Locale::Zh) => "该用户不存在，请检查。",
            (AuthError::UserNameTaken, Locale::En) => {
                "This username already exists, please choose another"
            }
            (AuthError::UserNameTaken, Locale::Zh) => "该账号已经存在，请更换",
            (AuthError::AccountDisabled, Locale::En) => "This account has been disabled.",
            (AuthError::AccountDisabled, Locale::Zh) => "该用户账号已被禁用。",
            (AuthError::PasswordIncorrect, Locale::En) => "Incorrect password, please check.",
            (AuthError::PasswordIncorrect, Locale::Zh) => "密码不正确，请检查。",
            (AuthError::SessionInvalid, Locale::En) => "Please log in first",
            (AuthError::SessionInvalid, Locale::Zh) => "请先登录",
            (AuthError::Database(_) | AuthError::Internal(_), Locale::En) => {
                "Something went wrong, please try again later"
            }
            (AuthError::Database(_) | AuthError::Internal(_), Locale::Zh) => "系统繁忙，请稍后再试",
        };
        Cow::Borrowed(text)
    }

    /// Log the error and convert it to a localized AppError
    pub fn into_app_error(self, locale: Locale) -> AppError {
        self.log();
        let app_error = AppError::new(self.kind(), self.message(locale));
        match self {
            AuthError::Database(e) => app_error.with_source(e),
            _ => app_error,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::PasswordIncorrect => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
