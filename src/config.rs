//! Environment-driven server configuration.

use crate::error::config::ConfigError;

/// Runtime configuration loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// SeaORM connection string for the relational store.
    pub database_url: String,
    /// Public base URL used to build the import URLs shown to league owners.
    pub public_app_url: String,
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
}

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            public_app_url: require("PUBLIC_APP_URL")?,
            listen_addr: validate_listen_addr(listen_addr)?,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// A bad listen address should fail at startup, not at bind time.
fn validate_listen_addr(value: String) -> Result<String, ConfigError> {
    value
        .parse::<std::net::SocketAddr>()
        .map_err(|err| ConfigError::InvalidEnvValue {
            var: "LISTEN_ADDR".to_string(),
            reason: err.to_string(),
        })?;

    Ok(value)
}
