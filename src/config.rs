//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default shared secret used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "your-secret-api-key";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Shared secret expected in the `x-api-key` header on mutating routes
    pub api_key: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `API_KEY` - shared secret for mutating routes (default: development key)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_key: env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}
