//! Application configuration management.
//!
//! Configuration is loaded from environment variables via the `envy`
//! crate, with an optional `.env` file picked up by `dotenvy`.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `ACCOUNT_SERVICE_URL` (required): base URL of the account service
/// - `ACCOUNT_SERVICE_TIMEOUT_SECS` (optional): remote call timeout,
///   defaults to 10 seconds
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    pub account_service_url: String,

    #[serde(default = "default_timeout_secs")]
    pub account_service_timeout_secs: u64,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing, cannot be
    /// parsed, or if the account service URL is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (does nothing if not found)
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()?;

        // Fail at startup rather than on the first remote call
        url::Url::parse(&config.account_service_url)
            .map_err(|e| anyhow::anyhow!("invalid ACCOUNT_SERVICE_URL: {e}"))?;

        Ok(config)
    }
}
