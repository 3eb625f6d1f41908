use std::time::Duration;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE: &str = "config/default";
const ENV_PREFIX: &str = "PANTRY";

/// Runtime settings for the inventory system.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the UPC lookup API; requests go to `<base>/lookup?upc=<code>`.
    pub lookup_base_url: String,
    pub lookup_timeout_secs: u64,
    /// Base URL images are served from.
    pub blob_base_url: String,
    pub default_image_name: String,
    /// Mailbox size of every actor.
    pub channel_buffer: usize,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration could not be loaded: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("lookup_base_url must not be empty".into()));
        }
        if self.blob_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("blob_base_url must not be empty".into()));
        }
        if self.default_image_name.trim().is_empty() {
            return Err(ConfigError::Invalid("default_image_name must not be empty".into()));
        }
        if self.lookup_timeout_secs == 0 {
            return Err(ConfigError::Invalid("lookup_timeout_secs must be positive".into()));
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid("channel_buffer must be positive".into()));
        }
        Ok(())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("lookup_base_url", "https://api.upcitemdb.com/prod/trial")?
        .set_default("lookup_timeout_secs", 10)?
        .set_default("blob_base_url", "memory://pantry")?
        .set_default("default_image_name", "default.png")?
        .set_default("channel_buffer", 32)?
        .set_default("log_level", "info")?)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration.
///
/// Layers, later wins:
/// 1. Built-in defaults
/// 2. `config/default.toml`, if present
/// 3. Environment variables (`PANTRY__LOOKUP_BASE_URL`, ...)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    build(
        defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__")),
    )
}
