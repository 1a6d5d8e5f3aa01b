//! Chain configuration and its YAML file form.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wc_core::{SOFT_SIGN, TerminalRule};

use crate::error::{AppError, AppResult};

/// Lowercase Russian alphabet, including ё.
pub const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Settings shared by every front end.
///
/// Fields missing from a config file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Letters a word may contain. Empty means any alphabetic character.
    pub alphabet: String,
    /// Characters skipped at the end of a multi-letter word.
    pub terminal_skip: Vec<char>,
    /// Lowercase words before validating them.
    pub lowercase_input: bool,
    /// Fewest words accepted for one attempt.
    pub min_words: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            alphabet: RUSSIAN_ALPHABET.to_string(),
            terminal_skip: vec![SOFT_SIGN],
            lowercase_input: true,
            min_words: 1,
        }
    }
}

impl ChainConfig {
    /// Terminal-letter rule for graph building.
    pub fn rule(&self) -> TerminalRule {
        TerminalRule::new(self.terminal_skip.iter().copied())
    }

    /// Whether `ch` may appear in a word.
    pub fn allows(&self, ch: char) -> bool {
        if self.alphabet.is_empty() {
            ch.is_alphabetic()
        } else {
            self.alphabet.contains(ch)
        }
    }

    /// Parse a config from YAML text.
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        let config: ChainConfig = serde_yaml::from_str(text)?;
        if config.min_words == 0 {
            return Err(AppError::Config("min_words must be at least 1".to_string()));
        }
        Ok(config)
    }
}

/// Load a config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<ChainConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = ChainConfig::from_yaml(&content)?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
