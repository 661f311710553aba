use serde::{Deserialize, Deserializer};
use std::net::{IpAddr, SocketAddr};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Custom deserializer for comma-separated strings
fn deserialize_comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(s.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_bool_env(key: &str) -> Option<bool> {
    read_env(key).and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    })
}

/// Application settings with environment variable support
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Security
    #[serde(deserialize_with = "deserialize_comma_separated")]
    pub cors_allow_origins: Vec<String>,

    // Logging
    pub log_level: String,
    pub log_format: String,

    // Data
    pub seed_mock_data: bool,
}

impl Settings {
    /// Create new settings instance from environment variables and .env file
    pub fn new() -> Result<Self, ConfigError> {
        Self::new_with_env_file(true)
    }

    /// Create new settings instance with optional .env file loading
    pub fn new_with_env_file(load_env_file: bool) -> Result<Self, ConfigError> {
        // Tests mutate process env; serialize reads so each build sees one consistent view
        static SETTINGS_BUILD_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        let build_mutex = SETTINGS_BUILD_MUTEX.get_or_init(|| Mutex::new(()));
        let _guard = build_mutex
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // .env only populates process env; overrides below read it like any other variable
        if load_env_file {
            dotenvy::dotenv().ok();
        }

        let mut builder = config::Config::builder()
            // Server defaults (4000 is the port the web client expects)
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", 4000i64)?
            // Security defaults
            .set_default("cors_allow_origins", "*")?
            // Logging defaults
            .set_default("log_level", "INFO")?
            .set_default("log_format", "json")?
            // Data defaults
            .set_default("seed_mock_data", true)?;

        // String overrides (UPPERCASE only)
        for (env_key, config_key) in [
            ("BIND_ADDRESS", "bind_address"),
            ("CORS_ALLOW_ORIGINS", "cors_allow_origins"),
            ("LOG_LEVEL", "log_level"),
            ("LOG_FORMAT", "log_format"),
        ] {
            if let Some(v) = read_env(env_key) {
                builder = builder.set_override(config_key, v)?;
            }
        }

        // Numeric overrides
        if let Some(v) = read_env("PORT").and_then(|s| s.trim().parse::<i64>().ok()) {
            builder = builder.set_override("port", v)?;
        }

        // Boolean overrides
        if let Some(v) = parse_bool_env("SEED_MOCK_DATA") {
            builder = builder.set_override("seed_mock_data", v)?;
        }

        let settings = builder.build()?;
        let config: Settings = settings.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.log_format.as_str(), "json" | "plain") {
            return Err(ConfigError::Validation(
                "log_format must be 'json' or 'plain'".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::Validation(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "bind_address '{}' is not a valid IP address",
                self.bind_address
            )));
        }

        Ok(())
    }

    /// Socket address the HTTP server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "bind_address '{}' is not a valid IP address",
                self.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests;
