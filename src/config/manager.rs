use super::{evolution::EvolutionConfig, report::ReportConfig, traits::ConfigSection};
use crate::error::GasimError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `GASIM_EVOLUTION__WINNER_COUNT=10`.
pub const ENV_PREFIX: &str = "GASIM";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GasimError> {
        self.evolution.validate()?;
        self.report.validate()?;
        Ok(())
    }

    /// Layer defaults, an optional TOML file and `GASIM_*` environment
    /// variables, then validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, GasimError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Read a TOML file without environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GasimError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GasimError::Configuration(format!("Failed to read config: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, GasimError> {
        let config: AppConfig = toml::from_str(contents)
            .map_err(|e| GasimError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, GasimError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GasimError> {
        let toml_str = self.to_toml_string()?;

        std::fs::write(path, toml_str)
            .map_err(|e| GasimError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
