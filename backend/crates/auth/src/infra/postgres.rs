//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::{conversions::classify_sqlx_error, kind::ErrorKind};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::{AuthSession, SessionUser},
    user::{NewUser, User},
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    activation::Activation, email::Email, nickname::Nickname, user_id::UserId,
    user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO gc_users (
                username,
                password,
                nickname,
                email,
                activate,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id,
                username,
                password,
                nickname,
                email,
                activate,
                created_at,
                updated_at
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password.as_str())
        .bind(user.nickname.as_str())
        .bind(user.email.as_str())
        .bind(user.activation.id())
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match classify_sqlx_error(&e) {
            ErrorKind::Conflict => AuthError::UserNameTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(row.into_user())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                password,
                nickname,
                email,
                activate,
                created_at,
                updated_at
            FROM gc_users
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn count_by_user_name(&self, user_name: &UserName) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gc_users WHERE username = $1")
            .bind(user_name.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO gc_sessions (
                session_id,
                user_id,
                username,
                nickname,
                email,
                created_at,
                expires_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user.id.as_i64())
        .bind(session.user.username.as_str())
        .bind(session.user.nickname.as_str())
        .bind(session.user.email.as_str())
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                username,
                nickname,
                email,
                created_at,
                expires_at
            FROM gc_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM gc_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query(
            "DELETE FROM gc_sessions WHERE expires_at IS NOT NULL AND expires_at <= $1",
        )
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    nickname: String,
    email: String,
    activate: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::new(self.id),
            user_name: UserName::from_db(self.username),
            password: UserPassword::from_db(self.password),
            nickname: Nickname::from_db(self.nickname),
            email: Email::from_db(self.email),
            activation: Activation::from_db(self.activate),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    user_id: i64,
    username: String,
    nickname: String,
    email: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: self.session_id,
            user: SessionUser {
                id: UserId::new(self.user_id),
                username: UserName::from_db(self.username),
                nickname: Nickname::from_db(self.nickname),
                email: Email::from_db(self.email),
            },
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}
