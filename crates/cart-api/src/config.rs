//! Cart service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `CART_API_HOST` - Bind address (default: 127.0.0.1)
//! - `CART_API_PORT` - Listen port (default: 4000)
//! - `CART_VARIANT` - Initial cart contents, `empty` or `seeded` (default: empty)
//! - `CART_STRICT_QUANTITY` - Reject quantities below 1 (default: false)
//! - `CART_API_PLAYGROUND` - Serve GraphiQL on `GET /graphql` (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use bookstore_core::{CartVariant, QuantityPolicy};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart service configuration.
#[derive(Debug, Clone)]
pub struct CartApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Initial cart contents
    pub variant: CartVariant,
    /// Quantity validation applied by the store
    pub quantity_policy: QuantityPolicy,
    /// Whether `GET /graphql` serves the GraphiQL IDE
    pub playground: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for CartApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 4000,
            variant: CartVariant::default(),
            quantity_policy: QuantityPolicy::default(),
            playground: true,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl CartApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CART_API_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_API_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CART_API_PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_API_PORT".to_string(), e.to_string()))?;
        let variant = get_env_or_default("CART_VARIANT", "empty")
            .parse::<CartVariant>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_VARIANT".to_string(), e.to_string()))?;
        let quantity_policy = if get_bool_env("CART_STRICT_QUANTITY", false)? {
            QuantityPolicy::Strict
        } else {
            QuantityPolicy::Permissive
        };
        let playground = get_bool_env("CART_API_PLAYGROUND", true)?;

        Ok(Self {
            host,
            port,
            variant,
            quantity_policy,
            playground,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a boolean environment variable.
fn get_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |value| parse_bool(key, &value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
