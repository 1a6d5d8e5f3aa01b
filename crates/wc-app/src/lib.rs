//! Shared application service layer for wordchain.
//!
//! Everything between raw user input and the chain core: configuration,
//! word validation, word-list files, and the solve service used by the CLI.

pub mod chain_service;
pub mod config;
pub mod error;
pub mod validate;
pub mod words;

// Re-export key types for convenience
pub use chain_service::{ChainOutcome, solve};
pub use config::{ChainConfig, load_config};
pub use error::{AppError, AppResult};
pub use validate::{validate_word, validate_words};
pub use words::{load_words, parse_line};
