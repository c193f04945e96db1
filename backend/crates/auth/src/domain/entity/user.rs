//! User Entity
//!
//! One row of `gc_users`.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    activation::Activation, email::Email, nickname::Nickname, user_id::UserId,
    user_name::UserName, user_password::UserPassword,
};

/// Stored user
#[derive(Debug, Clone)]
pub struct User {
    /// Identifier assigned by the store
    pub user_id: UserId,
    /// Login handle (unique)
    pub user_name: UserName,
    /// Argon2id hash
    pub password: UserPassword,
    pub nickname: Nickname,
    pub email: Email,
    pub activation: Activation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.activation.can_login()
    }
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password: UserPassword,
    pub nickname: Nickname,
    pub email: Email,
    pub activation: Activation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// Enabled account stamped with the current time
    pub fn new(user_name: UserName, password: UserPassword, nickname: Nickname, email: Email) -> Self {
        let now = Utc::now();

        Self {
            user_name,
            password,
            nickname,
            email,
            activation: Activation::Enabled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the assigned id
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            user_name: self.user_name,
            password: self.password,
            nickname: self.nickname,
            email: self.email,
            activation: self.activation,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
