//! Auth Session Entity
//!
//! Server-side session referenced by the signed session cookie. Holds a
//! snapshot of the user taken at login; later profile changes are not
//! reflected until the next login.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    email::Email, nickname::Nickname, user_id::UserId, user_name::UserName,
};

/// Immutable user snapshot stored with the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: UserName,
    pub nickname: Nickname,
    pub email: Email,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            username: user.user_name.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
        }
    }
}

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub user: SessionUser,
    pub created_at: DateTime<Utc>,
    /// `None` lives until logout (browser-session cookie)
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    /// An expiry past the representable range is clamped to the latest instant.
    pub fn new(user: SessionUser, ttl: Option<Duration>) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user,
            created_at: now,
            expires_at: ttl.map(|ttl| {
                now.checked_add_signed(ttl)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC)
            }),
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SessionUser {
        SessionUser {
            id: UserId::new(1),
            username: UserName::from_db("alice"),
            nickname: Nickname::from_db("A"),
            email: Email::from_db("a@x.com"),
        }
    }

    #[test]
    fn test_without_ttl_never_expires() {
        let session = AuthSession::new(snapshot(), None);
        assert!(session.expires_at.is_none());
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expiry() {
        let live = AuthSession::new(snapshot(), Some(Duration::hours(1)));
        assert!(!live.is_expired());

        let dead = AuthSession::new(snapshot(), Some(Duration::seconds(-1)));
        assert!(dead.is_expired());
    }

    #[test]
    fn test_out_of_range_ttl_is_clamped() {
        let session = AuthSession::new(snapshot(), Some(Duration::MAX));
        assert_eq!(session.expires_at, Some(DateTime::<Utc>::MAX_UTC));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "alice", "nickname": "A", "email": "a@x.com"})
        );
    }
}
