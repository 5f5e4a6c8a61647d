//! Centralized configuration for the session token service.
//!
//! All configuration is loaded from environment variables and validated
//! at load time. Components never read the environment themselves; they
//! receive explicit values at construction.

use crate::error::AuthError;
use std::env;
use std::time::Duration;

/// Session token service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symmetric signing key for access credentials, fixed for the
    /// process lifetime.
    pub signing_key: Vec<u8>,
    /// Access credential TTL.
    pub access_token_ttl: Duration,
    /// Refresh record TTL.
    pub refresh_token_ttl: Duration,
    /// Redis connection URL for the durable refresh store.
    pub redis_url: String,
    /// Endpoint receiving anomaly alerts.
    pub alert_endpoint: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let signing_key = parse_signing_key()?;
        let access_token_ttl = Duration::from_secs(parse_env("ACCESS_TOKEN_TTL", 900)?);
        let refresh_token_ttl = Duration::from_secs(parse_env("REFRESH_TOKEN_TTL", 604_800)?);

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let alert_endpoint = env::var("ALERT_WEBHOOK_URL")
            .map_err(|_| AuthError::config("ALERT_WEBHOOK_URL is required"))?;

        Ok(Self {
            signing_key,
            access_token_ttl,
            refresh_token_ttl,
            redis_url,
            alert_endpoint,
        })
    }
}

/// Parse environment variable with default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AuthError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| AuthError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

/// Parse the base64-encoded signing key from the environment.
fn parse_signing_key() -> Result<Vec<u8>, AuthError> {
    let key = env::var("SIGNING_KEY").map_err(|_| AuthError::config("SIGNING_KEY is required"))?;

    let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &key)
        .map_err(|e| AuthError::config(format!("Invalid SIGNING_KEY: {}", e)))?;

    if bytes.is_empty() {
        return Err(AuthError::config("SIGNING_KEY must not be empty"));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests share process state; keep them in one test to avoid
    // interleaving with parallel test threads.
    #[test]
    fn test_config_from_env() {
        env::set_var("SIGNING_KEY", "c2lnbmluZy1rZXktZm9yLXRlc3Rz");
        env::set_var("ALERT_WEBHOOK_URL", "http://localhost:9999/alerts");
        env::remove_var("ACCESS_TOKEN_TTL");
        env::remove_var("REFRESH_TOKEN_TTL");
        env::remove_var("REDIS_URL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.signing_key, b"signing-key-for-tests");
        assert_eq!(config.access_token_ttl, Duration::from_secs(900));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(604_800));
        assert_eq!(config.redis_url, "redis://localhost:6379");

        env::set_var("ACCESS_TOKEN_TTL", "sixty");
        assert!(Config::from_env().is_err());
        env::remove_var("ACCESS_TOKEN_TTL");

        env::set_var("SIGNING_KEY", "not base64!!!");
        assert!(Config::from_env().is_err());
        env::remove_var("SIGNING_KEY");
        assert!(Config::from_env().is_err());
    }
}
