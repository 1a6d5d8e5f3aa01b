//! Transition-letter extraction.
//!
//! A word is an edge from its first letter to its terminal letter. The
//! terminal letter ignores one trailing "silent" character (the soft sign by
//! default) when the word is longer than one character.

use crate::error::{WcError, WcResult};

/// A single vertex of the transition graph.
pub type Letter = char;

/// Cyrillic soft sign, skipped at the end of multi-letter words.
pub const SOFT_SIGN: Letter = 'ь';

/// Rule for picking a word's terminal letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalRule {
    /// Characters ignored when they end a word of length > 1.
    skip: Vec<Letter>,
}

impl Default for TerminalRule {
    fn default() -> Self {
        Self {
            skip: vec![SOFT_SIGN],
        }
    }
}

impl TerminalRule {
    /// Rule with a custom skip set.
    pub fn new(skip: impl IntoIterator<Item = Letter>) -> Self {
        let mut skip: Vec<Letter> = skip.into_iter().collect();
        skip.sort_unstable();
        skip.dedup();
        Self { skip }
    }

    /// Rule that never skips (terminal letter is always the last character).
    pub fn plain() -> Self {
        Self { skip: Vec::new() }
    }

    pub fn skipped(&self) -> &[Letter] {
        &self.skip
    }

    fn skips(&self, ch: Letter) -> bool {
        self.skip.contains(&ch)
    }

    /// First letter of `word`.
    pub fn start_letter(&self, word: &str) -> WcResult<Letter> {
        word.chars().next().ok_or(WcError::EmptyWord)
    }

    /// Terminal letter of `word`, honouring the skip set.
    pub fn end_letter(&self, word: &str) -> WcResult<Letter> {
        let mut rev = word.chars().rev();
        let last = rev.next().ok_or(WcError::EmptyWord)?;
        match rev.next() {
            Some(prev) if self.skips(last) => Ok(prev),
            _ => Ok(last),
        }
    }

    /// `(start, end)` transition of `word`.
    pub fn normalize(&self, word: &str) -> WcResult<(Letter, Letter)> {
        Ok((self.start_letter(word)?, self.end_letter(word)?))
    }
}

/// `(start, end)` transition of `word` under the default soft-sign rule.
pub fn normalize(word: &str) -> WcResult<(Letter, Letter)> {
    TerminalRule::default().normalize(word)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn start_is_first_char(word in "[а-яё]{1,12}") {
            let (start, _) = normalize(&word).unwrap();
            prop_assert_eq!(Some(start), word.chars().next());
        }

        #[test]
        fn end_is_soft_sign_only_for_lone_sign(word in "[а-яё]{1,12}") {
            let (_, end) = normalize(&word).unwrap();
            if end == SOFT_SIGN {
                let count = word.chars().count();
                let last_two: Vec<char> = word.chars().rev().take(2).collect();
                prop_assert!(count == 1 || last_two == vec![SOFT_SIGN, SOFT_SIGN]);
            }
        }
    }
}
