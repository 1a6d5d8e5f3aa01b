//! Error types for the wc-app service layer.

use std::path::PathBuf;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read word list: {path}")]
    WordListRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Empty word")]
    EmptyWord,

    #[error("Word '{word}' contains '{ch}', which is not in the alphabet")]
    ForeignLetter { word: String, ch: char },

    #[error("Need at least {min} words, got {got}")]
    TooFewWords { min: usize, got: usize },

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wc_core::WcError> for AppError {
    fn from(err: wc_core::WcError) -> Self {
        match err {
            wc_core::WcError::EmptyWord => AppError::EmptyWord,
            other => AppError::Graph(other.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(format!("Failed to parse config YAML: {}", err))
    }
}
