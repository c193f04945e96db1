//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::MAX_SESSION_TTL;
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// `RUN_MODE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Debug,
    Release,
    Test,
}

impl RunMode {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            "test" => Ok(Self::Test),
            other => bail!("RUN_MODE must be debug, release or test, got {other:?}"),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Release => "release",
            Self::Test => "test",
        })
    }
}

/// Everything the server needs to start
pub struct AppConfig {
    pub run_mode: RunMode,
    pub database: PgConnectOptions,
    pub max_connections: u32,
    pub http_addr: SocketAddr,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let run_mode = match var("RUN_MODE") {
            Some(value) => RunMode::parse(&value)?,
            None => RunMode::Debug,
        };

        let database = match var("DATABASE_URL") {
            Some(url) => url
                .trim()
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL is not a valid postgres URL")?,
            None => database_from_parts(&var)?,
        };

        let max_connections = parse_or(&var, "DB_MAX_CONNECTIONS", 5u32)?;
        if max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        let host: IpAddr = parse_or(&var, "HTTP_ADDR", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parse_or(&var, "HTTP_PORT", 8080)?;

        let mut auth = match (run_mode, var("SESSION_SECRET")) {
            (_, Some(secret)) => AuthConfig {
                session_secret: decode_secret(&secret)?,
                cookie_secure: run_mode == RunMode::Release,
                ..AuthConfig::default()
            },
            (RunMode::Release, None) => bail!("SESSION_SECRET must be set in release mode"),
            (RunMode::Debug | RunMode::Test, None) => AuthConfig::development(),
        };

        if let Some(secs) = var("SESSION_TTL_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("SESSION_TTL_SECS is not a number: {secs:?}"))?;
            if secs == 0 {
                bail!("SESSION_TTL_SECS must be positive");
            }
            if secs > MAX_SESSION_TTL.as_secs() {
                bail!(
                    "SESSION_TTL_SECS must not exceed {}",
                    MAX_SESSION_TTL.as_secs()
                );
            }
            auth.session_ttl = Some(Duration::from_secs(secs));
        }

        auth.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(Self {
            run_mode,
            database,
            max_connections,
            http_addr: SocketAddr::new(host, port),
            auth,
        })
    }
}

/// `DB_*` parts; values go in as-is, no URL escaping involved
fn database_from_parts<F>(var: &F) -> anyhow::Result<PgConnectOptions>
where
    F: Fn(&str) -> Option<String>,
{
    let driver = var("DB_CONNECTION").unwrap_or_else(|| "postgres".to_string());
    if !matches!(
        driver.trim().to_ascii_lowercase().as_str(),
        "postgres" | "postgresql" | "postgre"
    ) {
        bail!("DB_CONNECTION {driver:?} is not supported, use postgres");
    }

    let host = var("DB_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = parse_or(var, "DB_PORT", 5432)?;
    let database = var("DB_DATABASE").unwrap_or_else(|| "forge".to_string());
    let username = var("DB_USERNAME").unwrap_or_else(|| "forge".to_string());

    let mut options = PgConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&username)
        .database(&database);
    if let Some(password) = var("DB_PASSWORD") {
        options = options.password(&password);
    }

    Ok(options)
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {value:?}")),
        None => Ok(default),
    }
}

fn decode_secret(value: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(value.trim())
        .context("SESSION_SECRET is not valid base64")?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len()))
}
