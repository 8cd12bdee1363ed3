//! Configuration management for the CypherX login demo
//!
//! The user seed ships inside the binary; timing knobs can be overridden
//! from `cypherx.toml` or `CYPHERX_*` environment variables.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

use crate::directory::UserRecord;

/// Bundled defaults and seed accounts
const BUNDLED_CONFIG: &str = include_str!("../config.toml");

/// Optional per-machine override file (`./cypherx.toml`)
const LOCAL_CONFIG: &str = "cypherx";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Artificial latency applied by the host after a successful login check
    /// Environment: CYPHERX_LOGIN_DELAY_MS
    pub login_delay_ms: u64,

    /// Artificial latency before the assistant echoes a message
    /// Environment: CYPHERX_RESPONSE_DELAY_MS
    pub response_delay_ms: u64,

    /// Seed records for the user directory, in load order
    pub users: Vec<UserRecord>,
}

impl AppConfig {
    /// Load the bundled config, then the local override file, then environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(LOCAL_CONFIG).required(false))
            .add_source(Environment::with_prefix("CYPHERX").try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Only the embedded defaults, independent of the working directory and environment
    pub fn bundled() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.users.is_empty() {
            return Err(config::ConfigError::Message(
                "at least one user must be configured".into(),
            ));
        }

        Ok(())
    }

    /// Login latency as Duration
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Assistant reply latency as Duration
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}
