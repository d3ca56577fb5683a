use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::import::AnalysisConfig;

/// Service configuration, layered: built-in defaults, then `Skipdesk.toml`,
/// then `SKIPDESK_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP bind host
    pub host: String,

    /// HTTP bind port
    pub port: u16,

    /// Record store location
    pub database_path: PathBuf,

    /// Import pipeline tunables
    pub analysis: AnalysisConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            database_path: PathBuf::from("skipdesk.db"),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(Figment::new())
    }

    fn load_from(overrides: Figment) -> Result<Self> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("Skipdesk.toml"))
            .merge(Env::prefixed("SKIPDESK_").split("__"))
            .merge(overrides)
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.analysis.validate().map_err(AppError::ConfigError)?;
        Ok(config)
    }
}
