use thiserror::Error;

#[derive(Error, Debug)]
pub enum FareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Age source exhausted: no value available for this call")]
    AgeSourceExhausted,
}

pub type Result<T> = std::result::Result<T, FareError>;
