//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Listen address used when `BIND_ADDRESS` is unset.
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Session inactivity expiry used when `SESSION_EXPIRY_DAYS` is unset.
pub const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Server settings read once at startup.
pub struct Config {
    /// SeaORM connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey/Redis URL for the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Socket address the HTTP listener binds to (`BIND_ADDRESS`)
    pub bind_address: String,
    /// Days of inactivity before a session expires (`SESSION_EXPIRY_DAYS`)
    pub session_expiry_days: i64,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `SESSION_EXPIRY_DAYS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_expiry_days: parse_expiry_days(std::env::var("SESSION_EXPIRY_DAYS").ok())?,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Parse the session expiry, which must be a positive whole number of days.
fn parse_expiry_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_EXPIRY_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_EXPIRY_DAYS".to_string(),
            reason: format!("expected a positive number of days, got {:?}", value),
        }),
    }
}
