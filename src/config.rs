//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use uuid::Uuid;

use crate::services::transaction_service::AdminSource;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `ADMIN_ID` (optional): id of the admin user; when unset the admin is
///   looked up by role
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default)]
    pub admin_id: Option<Uuid>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names are automatically converted: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }

    /// How the transaction service finds the admin party.
    pub fn admin_source(&self) -> AdminSource {
        match self.admin_id {
            Some(id) => AdminSource::Id(id),
            None => AdminSource::Role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config: Config =
            envy::from_iter(vars(&[("DATABASE_URL", "postgres://localhost/wallet")])).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.admin_source(), AdminSource::Role);
    }

    #[test]
    fn test_admin_id_selects_fixed_admin() {
        let config: Config = envy::from_iter(vars(&[
            ("DATABASE_URL", "postgres://localhost/wallet"),
            ("SERVER_PORT", "8080"),
            ("ADMIN_ID", "550e8400-e29b-41d4-a716-446655440000"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(
            config.admin_source(),
            AdminSource::Id("550e8400-e29b-41d4-a716-446655440000".parse().unwrap())
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        let result: Result<Config, _> = envy::from_iter(vars(&[("SERVER_PORT", "8080")]));
        assert!(result.is_err());
    }
}
