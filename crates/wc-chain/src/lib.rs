//! Closed word chains via Eulerian circuits.
//!
//! Words are edges of a letter-transition multigraph (see `wc-graph`). A
//! chain using every word exactly once, where each word starts with the
//! previous word's terminal letter, is an Eulerian trail; this crate also
//! requires the trail to close back on its first letter.

pub mod error;
pub mod hierholzer;
pub mod path_finder;
pub mod start;
pub mod verify;

pub use error::{ChainError, ChainResult, FailureKind};
pub use path_finder::PathFinder;
pub use verify::{is_closed, is_linked};

use wc_core::TerminalRule;
use wc_graph::GraphBuilder;

/// Arrange `words` into a closed chain, keeping the failure reason.
pub fn chain_words<I, S>(words: I, rule: TerminalRule) -> ChainResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = GraphBuilder::with_rule(rule);
    builder.extend_words(words)?;
    PathFinder::new(builder.build()?).build_chain()
}

/// Arrange `words` into a closed chain with the default soft-sign rule.
///
/// Every failure collapses to `None`.
pub fn find_chain<I, S>(words: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    chain_words(words, TerminalRule::default()).ok()
}
