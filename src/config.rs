//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::models::api_key::CredentialSet;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `VALID_API_KEYS` (optional): comma-separated API keys accepted by the
///   authentication gate. No keys means every protected request is rejected.
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 5000
/// - `DATABASE_URL` (optional): PostgreSQL connection string. Without it the
///   bundled catalog is served from memory.
/// - `CORS_ORIGINS` (optional): comma-separated allowed origins. Empty means any origin.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub valid_api_keys: Vec<String>,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed into its expected type
    /// (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names are converted automatically: valid_api_keys -> VALID_API_KEYS
        envy::from_env::<Config>()
    }

    /// Build the immutable credential set from the configured keys.
    pub fn credentials(&self) -> CredentialSet {
        CredentialSet::new(&self.valid_api_keys)
    }

    /// Parse the configured CORS origins into header values.
    ///
    /// Blank entries are skipped. An origin that is not a valid header value
    /// is a startup error rather than something to silently drop.
    pub fn cors_origins(&self) -> anyhow::Result<Vec<HeaderValue>> {
        self.cors_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| anyhow::anyhow!("invalid CORS origin {origin:?}: {e}"))
            })
            .collect()
    }
}
