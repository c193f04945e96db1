//! Form and Response DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity::auth_session::SessionUser;
use crate::domain::value_object::{
    email::Email, nickname::Nickname, user_id::UserId, user_name::UserName,
};

// ============================================================================
// Login
// ============================================================================

/// `POST /login` form; missing fields arrive empty and fail validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// `data` of a successful login envelope
#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub id: UserId,
    pub username: UserName,
    pub nickname: Nickname,
    pub email: Email,
    pub jump: String,
}

impl LoginData {
    pub fn new(user: SessionUser, jump: String) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
            email: user.email,
            jump,
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// `POST /register` form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub nickname: String,
    pub email: String,
}

/// `data` carrying only a redirect target
#[derive(Debug, Clone, Serialize)]
pub struct JumpData {
    pub jump: String,
}
