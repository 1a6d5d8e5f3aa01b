//! Word validation against the configured alphabet.

use crate::config::ChainConfig;
use crate::error::{AppError, AppResult};

/// Normalize and check one word.
///
/// Surrounding whitespace is trimmed and, if configured, the word is
/// lowercased before every character is checked against the alphabet.
pub fn validate_word(word: &str, config: &ChainConfig) -> AppResult<String> {
    let word = word.trim();
    let word = if config.lowercase_input {
        word.to_lowercase()
    } else {
        word.to_string()
    };

    if word.is_empty() {
        return Err(AppError::EmptyWord);
    }
    if let Some(ch) = word.chars().find(|&ch| !config.allows(ch)) {
        return Err(AppError::ForeignLetter { word, ch });
    }
    Ok(word)
}

/// Validate every word and enforce the minimum count.
pub fn validate_words<S: AsRef<str>>(words: &[S], config: &ChainConfig) -> AppResult<Vec<String>> {
    if words.len() < config.min_words {
        return Err(AppError::TooFewWords {
            min: config.min_words,
            got: words.len(),
        });
    }
    words
        .iter()
        .map(|w| validate_word(w.as_ref(), config))
        .collect()
}
