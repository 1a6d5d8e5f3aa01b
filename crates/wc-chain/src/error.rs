//! Error types for chain building.

use thiserror::Error;
use wc_core::{Letter, WcError};

/// Reasons a closed chain through all words does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Ambiguous start: both '{first}' and '{second}' have one more outgoing word than incoming")]
    AmbiguousStart { first: Letter, second: Letter },

    #[error("Unbalanced letter '{letter}' (out={out_degree}, in={in_degree})")]
    DegreeImbalance {
        letter: Letter,
        out_degree: usize,
        in_degree: usize,
    },

    #[error("No words to chain")]
    EmptyGraph,

    /// Unreachable for graphs from `GraphBuilder::build`, whose adjacency and
    /// edge index agree; disconnected inputs fail as `Incomplete` instead.
    #[error("No word left for transition '{from}' -> '{to}'")]
    EdgeExhausted { from: Letter, to: Letter },

    #[error("Walk used {visited} of {expected} words; the letters are not connected")]
    Incomplete { visited: usize, expected: usize },

    #[error("Chain does not close: starts with '{start}', ends with '{end}'")]
    NotClosed { start: Letter, end: Letter },

    #[error("Graph error: {0}")]
    Graph(#[from] WcError),
}

pub type ChainResult<T> = Result<T, ChainError>;

/// Coarse failure category, without per-letter detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    AmbiguousStart,
    DegreeImbalance,
    EmptyGraph,
    EdgeExhausted,
    NotClosed,
    Invalid,
}

impl ChainError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ChainError::AmbiguousStart { .. } => FailureKind::AmbiguousStart,
            ChainError::DegreeImbalance { .. } => FailureKind::DegreeImbalance,
            ChainError::EmptyGraph => FailureKind::EmptyGraph,
            ChainError::EdgeExhausted { .. } | ChainError::Incomplete { .. } => {
                FailureKind::EdgeExhausted
            }
            ChainError::NotClosed { .. } => FailureKind::NotClosed,
            ChainError::Graph(_) => FailureKind::Invalid,
        }
    }
}

impl From<ChainError> for WcError {
    fn from(e: ChainError) -> Self {
        match e {
            ChainError::Graph(inner) => inner,
            other => WcError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
