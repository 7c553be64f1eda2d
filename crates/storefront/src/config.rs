//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOP_PORT` - Listen port (default: 3000)
//! - `SHOP_BASE_URL` - Public URL for the storefront (default: `http://localhost:3000`)
//! - `SHOP_FILTER_MODEL` - Structural catalog filter: `sizes` or `category` (default: sizes)
//! - `SHOP_AUTH_BACKEND` - Account directory: `demo` or `argon2` (default: demo)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

use crate::catalog::FilterModel;
use crate::services::auth::AuthBackend;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Structural filter offered by the catalog
    pub filter_model: FilterModel,
    /// Account directory implementation
    pub auth_backend: AuthBackend,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: DEFAULT_BASE_URL.to_string(),
            filter_model: FilterModel::default(),
            auth_backend: AuthBackend::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("SHOP_HOST", DEFAULT_HOST)?;
        let port = parse_env("SHOP_PORT", DEFAULT_PORT)?;
        let base_url = get_env_or_default("SHOP_BASE_URL", DEFAULT_BASE_URL);
        parse_value::<Url>("SHOP_BASE_URL", &base_url)?;
        let filter_model = parse_env("SHOP_FILTER_MODEL", "sizes")?;
        let auth_backend = parse_env("SHOP_AUTH_BACKEND", "demo")?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            filter_model,
            auth_backend,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable (or its default) with `FromStr`.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_port() {
        let port: u16 = parse_value("SHOP_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_value_invalid_port() {
        let result = parse_value::<u16>("SHOP_PORT", "eighty");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SHOP_PORT"));
    }

    #[test]
    fn test_parse_value_filter_model() {
        let model: FilterModel = parse_value("SHOP_FILTER_MODEL", "category").unwrap();
        assert_eq!(model, FilterModel::Category);
        assert!(parse_value::<FilterModel>("SHOP_FILTER_MODEL", "brand").is_err());
    }

    #[test]
    fn test_parse_value_auth_backend() {
        let backend: AuthBackend = parse_value("SHOP_AUTH_BACKEND", "argon2").unwrap();
        assert_eq!(backend, AuthBackend::Argon2);
    }

    #[test]
    fn test_parse_value_base_url() {
        let url: Url = parse_value("SHOP_BASE_URL", "https://shop.example").unwrap();
        assert_eq!(url.scheme(), "https");
        assert!(parse_value::<Url>("SHOP_BASE_URL", "not a url").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            port: 3000,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = StorefrontConfig::default();
        assert!(!config.is_secure());
        config.base_url = "https://shop.example".to_string();
        assert!(config.is_secure());
    }
}
