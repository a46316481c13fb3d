use thiserror::Error;

#[derive(Error, Debug)]
pub enum GasimError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Population error: {0}")]
    Population(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, GasimError>;
