//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the downstream base URL.
pub const SERVICE_2_URL_ENV: &str = "SERVICE_2_URL";

/// Environment variable overriding the listener bind address.
pub const BIND_ADDRESS_ENV: &str = "BIND_ADDRESS";

/// Environment variable pointing at an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "RELAY_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read and parse a TOML config file, without semantic validation.
fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let config = read_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration: optional TOML file (from
/// `RELAY_CONFIG`), then environment overrides, then validation.
pub fn resolve_config() -> Result<RelayConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty()) {
        Some(path) => read_config(Path::new(&path))?,
        None => RelayConfig::default(),
    };

    apply_overrides(
        &mut config,
        env::var(SERVICE_2_URL_ENV).ok(),
        env::var(BIND_ADDRESS_ENV).ok(),
    );

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides. Unset or empty values leave the config
/// untouched, so an empty `SERVICE_2_URL` still falls back to the default.
fn apply_overrides(
    config: &mut RelayConfig,
    service_2_url: Option<String>,
    bind_address: Option<String>,
) {
    if let Some(url) = service_2_url.filter(|v| !v.is_empty()) {
        config.downstream.base_url = url;
    }
    if let Some(addr) = bind_address.filter(|v| !v.is_empty()) {
        config.listener.bind_address = addr;
    }
}
