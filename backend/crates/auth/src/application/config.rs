//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Longest accepted session lifetime (100 years)
pub const MAX_SESSION_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime; `None` means a browser-session cookie and no server-side expiry
    pub session_ttl: Option<Duration>,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "gc_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: None,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session TTL, capped at [`MAX_SESSION_TTL`]
    pub fn effective_session_ttl(&self) -> Option<Duration> {
        self.session_ttl.map(|ttl| ttl.min(MAX_SESSION_TTL))
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> Option<chrono::Duration> {
        self.effective_session_ttl()
            .map(|ttl| chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX))
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: self
                .effective_session_ttl()
                .map(|ttl| i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_preset() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
        assert!(config.session_ttl.is_none());
    }

    #[test]
    fn test_cookie_config_follows_ttl() {
        let mut config = AuthConfig::default();
        assert_eq!(config.cookie_config().max_age_secs, None);

        config.session_ttl = Some(Duration::from_secs(3600));
        let cookie = config.cookie_config();
        assert_eq!(cookie.max_age_secs, Some(3600));
        assert_eq!(cookie.name, "gc_session");
        assert!(cookie.http_only);
        assert_eq!(config.session_ttl_chrono(), Some(chrono::Duration::hours(1)));
    }

    #[test]
    fn test_oversized_ttl_is_capped() {
        let config = AuthConfig {
            session_ttl: Some(Duration::from_secs(9_000_000_000_000_000)),
            ..AuthConfig::default()
        };
        assert_eq!(config.effective_session_ttl(), Some(MAX_SESSION_TTL));
        assert_eq!(
            config.cookie_config().max_age_secs,
            Some(MAX_SESSION_TTL.as_secs() as i64)
        );

        let ttl = config.session_ttl_chrono().unwrap();
        assert_eq!(ttl.num_seconds(), MAX_SESSION_TTL.as_secs() as i64);
        assert!(chrono::Utc::now().checked_add_signed(ttl).is_some());
    }
}
