//! Validate, build and solve in one call.

use serde::Serialize;
use tracing::{debug, info};
use wc_chain::{FailureKind, PathFinder};
use wc_graph::GraphBuilder;

use crate::config::ChainConfig;
use crate::error::AppResult;
use crate::validate::validate_words;

/// Result of one chain attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainOutcome {
    /// Validated input words, in input order.
    pub words: Vec<String>,
    /// Closed chain through every word, if one exists.
    pub chain: Option<Vec<String>>,
    /// Why there is no chain.
    pub failure: Option<FailureKind>,
    /// Human-readable failure detail.
    pub reason: Option<String>,
}

impl ChainOutcome {
    pub fn is_closed(&self) -> bool {
        self.chain.is_some()
    }
}

/// Validate `words` and look for a closed chain through all of them.
///
/// Invalid input is an error; "no chain exists" is a normal outcome.
pub fn solve<S: AsRef<str>>(words: &[S], config: &ChainConfig) -> AppResult<ChainOutcome> {
    let words = validate_words(words, config)?;

    let mut builder = GraphBuilder::with_rule(config.rule());
    builder.extend_words(words.iter().cloned())?;
    let graph = builder.build()?;
    debug!(
        letters = graph.vertices().len(),
        words = graph.edge_count(),
        "solving"
    );

    let outcome = match PathFinder::new(graph).build_chain() {
        Ok(chain) => ChainOutcome {
            words,
            chain: Some(chain),
            failure: None,
            reason: None,
        },
        Err(err) => {
            info!(kind = ?err.kind(), %err, "no closed chain");
            ChainOutcome {
                words,
                chain: None,
                failure: Some(err.kind()),
                reason: Some(err.to_string()),
            }
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn solves_cycle() {
        let outcome = solve(&["Кот", "топор", "РАК"], &ChainConfig::default()).unwrap();
        assert!(outcome.is_closed());
        assert_eq!(outcome.words, vec!["кот", "топор", "рак"]);
        assert_eq!(
            outcome.chain,
            Some(vec!["кот".into(), "топор".into(), "рак".into()])
        );
    }

    #[test]
    fn reports_failure_kind() {
        let outcome = solve(&["аб", "бв", "вб"], &ChainConfig::default()).unwrap();
        assert!(!outcome.is_closed());
        assert_eq!(outcome.failure, Some(FailureKind::NotClosed));
        assert!(outcome.reason.unwrap().contains("does not close"));
    }

    #[test]
    fn invalid_word_is_error() {
        let result = solve(&["кот", "dog"], &ChainConfig::default());
        assert!(matches!(result, Err(AppError::ForeignLetter { .. })));
    }
}
