//! In-memory repository for tests
//!
//! Implements the same traits as [`PgAuthRepository`](super::PgAuthRepository),
//! including the unique username constraint.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{activation::Activation, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: HashMap<Uuid, AuthSession>,
}

/// Shared in-memory store; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, user_name: &str) -> Option<User> {
        let tables = self.tables.lock().unwrap();
        tables
            .users
            .iter()
            .find(|u| u.user_name.as_str() == user_name)
            .cloned()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn set_activation(&self, user_name: &str, activation: Activation) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables
            .users
            .iter_mut()
            .find(|u| u.user_name.as_str() == user_name)
        {
            user.activation = activation;
            user.updated_at = Utc::now();
        }
    }

    pub fn insert_session(&self, session: AuthSession) {
        let mut tables = self.tables.lock().unwrap();
        tables.sessions.insert(session.session_id, session);
    }

    pub fn has_session(&self, session_id: Uuid) -> bool {
        self.tables.lock().unwrap().sessions.contains_key(&session_id)
    }

    pub fn session_count(&self) -> usize {
        self.tables.lock().unwrap().sessions.len()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }

        let user_id = UserId::new(tables.users.len() as i64 + 1);
        let user = user.clone().into_user(user_id);
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn count_by_user_name(&self, user_name: &UserName) -> AuthResult<i64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .filter(|u| &u.user_name == user_name)
            .count() as i64)
    }
}

impl AuthSessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.insert_session(session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.sessions.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.tables.lock().unwrap().sessions.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.sessions.len();
        tables.sessions.retain(|_, session| !session.is_expired());
        Ok((before - tables.sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::auth_session::SessionUser;
    use crate::domain::value_object::{
        email::Email,
        nickname::Nickname,
        user_password::{RawPassword, UserPassword},
    };

    fn new_user(name: &str) -> NewUser {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        NewUser::new(
            UserName::from_db(name),
            UserPassword::from_raw(&raw, None).unwrap(),
            Nickname::from_db("A"),
            Email::from_db("a@x.com"),
        )
    }

    #[tokio::test]
    async fn test_unique_user_name() {
        let repo = MemoryAuthRepository::new();
        let first = UserRepository::create(&repo, &new_user("alice")).await.unwrap();
        assert_eq!(first.user_id, UserId::new(1));

        let err = UserRepository::create(&repo, &new_user("alice")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));
        assert_eq!(
            repo.count_by_user_name(&UserName::from_db("alice")).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let repo = MemoryAuthRepository::new();
        let user = SessionUser {
            id: UserId::new(1),
            username: UserName::from_db("alice"),
            nickname: Nickname::from_db("A"),
            email: Email::from_db("a@x.com"),
        };
        repo.insert_session(AuthSession::new(user.clone(), None));
        repo.insert_session(AuthSession::new(user, Some(chrono::Duration::seconds(-1))));

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(repo.session_count(), 1);
    }
}
