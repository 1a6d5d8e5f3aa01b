//! Graph-specific error types.

use wc_core::{Letter, WcError, WordId};

/// Graph construction and consistency errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Summed degrees disagree with each other or with the word count.
    DegreeSumMismatch {
        out_total: usize,
        in_total: usize,
        words: usize,
    },

    /// A letter's adjacency list disagrees with its out-degree counter.
    AdjacencyMismatch {
        letter: Letter,
        listed: usize,
        out_degree: usize,
    },

    /// A word sits in a bucket whose transition it does not realize.
    MisfiledWord {
        word: WordId,
        bucket: (Letter, Letter),
    },

    /// Buckets hold a different number of words than the graph has edges.
    EdgeCountMismatch { indexed: usize, words: usize },

    /// Word id not present in this graph.
    WordNotFound { word: WordId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DegreeSumMismatch {
                out_total,
                in_total,
                words,
            } => {
                write!(
                    f,
                    "Degree sums disagree: out={}, in={}, words={}",
                    out_total, in_total, words
                )
            }
            GraphError::AdjacencyMismatch {
                letter,
                listed,
                out_degree,
            } => {
                write!(
                    f,
                    "Letter '{}' lists {} destinations but has out-degree {}",
                    letter, listed, out_degree
                )
            }
            GraphError::MisfiledWord { word, bucket } => {
                write!(
                    f,
                    "Word {} is filed under transition {}->{} it does not realize",
                    word, bucket.0, bucket.1
                )
            }
            GraphError::EdgeCountMismatch { indexed, words } => {
                write!(
                    f,
                    "Edge index holds {} words but graph has {}",
                    indexed, words
                )
            }
            GraphError::WordNotFound { word } => {
                write!(f, "Word {} not found in graph", word)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for WcError {
    fn from(err: GraphError) -> Self {
        WcError::Invariant {
            what: err.to_string(),
        }
    }
}
