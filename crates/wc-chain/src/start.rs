//! Start-vertex classification.
//!
//! A degree pre-check only: it does not look at connectivity. Balanced but
//! disconnected graphs pass here and fail later, during reconstruction.

use tracing::{debug, trace};
use wc_core::Letter;
use wc_graph::Graph;

use crate::error::{ChainError, ChainResult};

/// Pick the letter an Eulerian trail over `graph` must start from.
///
/// - `out - in == 1` marks the forced start of an open trail; two such
///   letters are ambiguous.
/// - `|out - in| > 1`, or a letter with incoming words but no outgoing
///   ones, rules out any trail.
/// - With no forced start, the first-seen letter with an outgoing word is
///   used.
pub fn find_start_node(graph: &Graph) -> ChainResult<Letter> {
    let mut forced: Option<Letter> = None;

    for &letter in graph.vertices() {
        let out_degree = graph.out_degree(letter);
        let in_degree = graph.in_degree(letter);
        let delta = out_degree as isize - in_degree as isize;
        trace!(%letter, out_degree, in_degree, delta, "classify letter");

        let imbalance = ChainError::DegreeImbalance {
            letter,
            out_degree,
            in_degree,
        };
        if delta.abs() > 1 {
            debug!(%letter, delta, "letter cannot be balanced");
            return Err(imbalance);
        }
        if out_degree == 0 && in_degree > 0 {
            debug!(%letter, in_degree, "letter is a dead end");
            return Err(imbalance);
        }
        if delta == 1 {
            if let Some(first) = forced {
                return Err(ChainError::AmbiguousStart {
                    first,
                    second: letter,
                });
            }
            forced = Some(letter);
        }
    }

    let start = match forced {
        Some(letter) => letter,
        None => graph
            .vertices()
            .iter()
            .copied()
            .find(|&v| graph.out_degree(v) > 0)
            .ok_or(ChainError::EmptyGraph)?,
    };
    debug!(%start, open_trail = forced.is_some(), "picked start letter");
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_graph::build_graph;

    fn start_of(words: &[&str]) -> ChainResult<Letter> {
        find_start_node(&build_graph(words.iter().copied()).unwrap())
    }

    #[test]
    fn circuit_starts_at_first_word() {
        assert_eq!(start_of(&["топор", "рак", "кот"]), Ok('т'));
    }

    #[test]
    fn open_trail_starts_at_surplus_letter() {
        // а->б, б->в, в->б : а has one extra outgoing word
        assert_eq!(start_of(&["аб", "бв", "вб"]), Ok('а'));
    }

    #[test]
    fn two_surplus_letters_are_ambiguous() {
        // а and в each have one extra outgoing word; б and г one extra incoming
        let result = start_of(&["аб", "аг", "га", "вб", "бг"]);
        assert_eq!(
            result,
            Err(ChainError::AmbiguousStart {
                first: 'а',
                second: 'в',
            })
        );
    }

    #[test]
    fn large_surplus_is_imbalance() {
        let result = start_of(&["кот", "тигр", "рысь", "кот"]);
        assert_eq!(
            result,
            Err(ChainError::DegreeImbalance {
                letter: 'к',
                out_degree: 2,
                in_degree: 0,
            })
        );
    }

    #[test]
    fn dead_end_is_imbalance() {
        let result = start_of(&["кот", "топор"]);
        assert_eq!(
            result,
            Err(ChainError::DegreeImbalance {
                letter: 'р',
                out_degree: 0,
                in_degree: 1,
            })
        );
    }

    #[test]
    fn empty_graph_has_no_start() {
        assert_eq!(start_of(&[]), Err(ChainError::EmptyGraph));
    }

    #[test]
    fn self_loop_starts_at_itself() {
        assert_eq!(start_of(&["а"]), Ok('а'));
    }
}
