use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WheelSetupError {
    #[error("Activation script not found: {}", .0.display())]
    MissingActivationScript(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Virtual environment error: {0}")]
    Venv(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Console error: {0}")]
    Console(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("Invalid wheel pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WheelSetupError>;
