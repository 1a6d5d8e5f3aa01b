//! Edge index: which words realize each letter transition.
//!
//! Buckets keep words in insertion order and hand them out front first, so
//! parallel edges between the same two letters are consumed deterministically.

use std::collections::{HashMap, VecDeque};

use wc_core::{Letter, WordId};

/// Mapping from an ordered `(source, destination)` pair to its words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIndex {
    buckets: HashMap<(Letter, Letter), VecDeque<WordId>>,
    /// Words not yet taken, over all buckets.
    remaining: usize,
}

impl EdgeIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `word` under the transition `from -> to`.
    pub fn insert(&mut self, from: Letter, to: Letter, word: WordId) {
        self.buckets.entry((from, to)).or_default().push_back(word);
        self.remaining += 1;
    }

    /// Take the earliest remaining word for `from -> to`.
    ///
    /// Returns `None` once the bucket is exhausted. Taking is irreversible.
    pub fn take(&mut self, from: Letter, to: Letter) -> Option<WordId> {
        let word = self.buckets.get_mut(&(from, to))?.pop_front()?;
        self.remaining -= 1;
        Some(word)
    }

    /// Words still filed under `from -> to`, earliest first.
    pub fn bucket(&self, from: Letter, to: Letter) -> impl Iterator<Item = WordId> + '_ {
        self.buckets
            .get(&(from, to))
            .into_iter()
            .flat_map(|b| b.iter().copied())
    }

    /// Number of words still filed under `from -> to`.
    pub fn bucket_len(&self, from: Letter, to: Letter) -> usize {
        self.buckets.get(&(from, to)).map_or(0, VecDeque::len)
    }

    /// Iterate over all `(transition, words)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ((Letter, Letter), &VecDeque<WordId>)> {
        self.buckets.iter().map(|(&k, v)| (k, v))
    }

    /// Number of distinct transitions ever filed.
    pub fn transition_count(&self) -> usize {
        self.buckets.len()
    }

    /// Words not yet taken.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every filed word has been taken.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
