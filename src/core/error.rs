use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum T0kenError {
    #[error("Invalid argument: {0}")]
    ArgumentError(String),
    #[error("Resolution error: {0}")]
    ResolutionError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Contract call failed: {0}")]
    ContractCallError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Missing artifact: {0}")]
    ArtifactError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl T0kenError {
    /// Process exit status for this failure. Argument errors share clap's usage code.
    pub fn exit_code(&self) -> i32 {
        match self {
            T0kenError::ArgumentError(_) => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for T0kenError {
    fn from(err: reqwest::Error) -> Self {
        T0kenError::NetworkError(err.to_string())
    }
}

impl From<clap::Error> for T0kenError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
        T0kenError::ArgumentError(message.trim_end().to_string())
    }
}
