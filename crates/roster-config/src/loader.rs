//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ROSTER";

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER_` prefix
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config, config_dir })
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Reloads the configuration from disk.
    pub fn reload(&mut self) -> Result<(), RosterError> {
        self.config = Self::load_config(&self.config_dir)?;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> Result<AppConfig, RosterError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(format!("{ENV_PREFIX}_ENVIRONMENT"))
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        if config.app.name.trim().is_empty() {
            return Err(RosterError::configuration("Application name is required"));
        }

        if config.telemetry.log_level.trim().is_empty() {
            return Err(RosterError::configuration("Log level is required"));
        }

        if config.app.is_production() && config.telemetry.log_level.eq_ignore_ascii_case("trace") {
            warn!("Trace logging enabled in production");
        }

        Ok(())
    }

    /// Gets a specific configuration value by key path.
    pub fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = serde_json::to_value(&self.config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::configuration(err.to_string())
}
