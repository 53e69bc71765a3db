//! Application configuration management.
//!
//! Configuration comes entirely from the environment (optionally seeded from a
//! `.env` file). The `envy` crate deserializes the variables into a type-safe
//! struct, so a missing or malformed value fails at startup rather than at the
//! first request.

use serde::Deserialize;

/// Runtime configuration for the wallet service.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if one exists (silently skipped otherwise),
    /// then deserializes the environment. Field names map to upper-cased
    /// variable names: `database_url` -> `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be
    /// parsed into its expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_3000_when_absent() {
        let config: Config = envy::from_iter(vec![(
            "DATABASE_URL".to_string(),
            "postgres://x/y".to_string(),
        )])
        .unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_url, "postgres://x/y");
    }

    #[test]
    fn explicit_port_wins_over_default() {
        let config: Config = envy::from_iter(vec![
            ("DATABASE_URL".to_string(), "postgres://x/y".to_string()),
            ("SERVER_PORT".to_string(), "8080".to_string()),
        ])
        .unwrap();
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result: Result<Config, _> = envy::from_iter(Vec::<(String, String)>::new());
        assert!(result.is_err());
    }
}
