//! Chain reconstruction over a built graph.

use tracing::{debug, warn};
use wc_core::{Letter, WordId};
use wc_graph::Graph;

use crate::error::{ChainError, ChainResult};
use crate::{hierholzer, start};

/// Finds a closed chain through every word of one graph.
///
/// Classification and traversal only read the graph. `build_chain` consumes
/// the finder because it drains the graph's edge index; a new attempt needs
/// a freshly built graph.
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: Graph,
}

impl PathFinder {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Letter the chain must start from, or why there is none.
    pub fn find_start_node(&self) -> ChainResult<Letter> {
        start::find_start_node(&self.graph)
    }

    /// Letter sequence of the Eulerian trail from `start`.
    pub fn hierholzer(&self, start: Letter) -> Vec<Letter> {
        hierholzer::hierholzer(&self.graph, start)
    }

    /// Order every word into a closed chain.
    pub fn build_chain(self) -> ChainResult<Vec<String>> {
        let start = self.find_start_node()?;
        let trail = self.hierholzer(start);
        let expected = self.graph.edge_count();
        let rule = self.graph.rule().clone();

        let (words, mut edges) = self.graph.into_edge_index();

        let mut order: Vec<WordId> = Vec::with_capacity(expected);
        for step in trail.windows(2) {
            let (from, to) = (step[0], step[1]);
            let id = edges.take(from, to).ok_or_else(|| {
                warn!(%from, %to, "transition bucket exhausted");
                ChainError::EdgeExhausted { from, to }
            })?;
            order.push(id);
        }

        if order.len() != expected {
            debug!(visited = order.len(), expected, "trail missed some words");
            return Err(ChainError::Incomplete {
                visited: order.len(),
                expected,
            });
        }

        let mut slots: Vec<Option<String>> = words.into_iter().map(Some).collect();
        let chain = order
            .into_iter()
            .map(|id| {
                slots
                    .get_mut(id.slot())
                    .and_then(Option::take)
                    .ok_or(ChainError::Incomplete {
                        visited: id.slot(),
                        expected,
                    })
            })
            .collect::<ChainResult<Vec<String>>>()?;

        let (Some(first), Some(last)) = (chain.first(), chain.last()) else {
            return Err(ChainError::EmptyGraph);
        };
        let chain_start = rule.start_letter(first)?;
        let chain_end = rule.end_letter(last)?;
        if chain_start != chain_end {
            debug!(%chain_start, %chain_end, "trail does not close");
            return Err(ChainError::NotClosed {
                start: chain_start,
                end: chain_end,
            });
        }

        debug!(words = chain.len(), %start, "closed chain found");
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_graph::build_graph;

    fn finder(words: &[&str]) -> PathFinder {
        PathFinder::new(build_graph(words.iter().copied()).unwrap())
    }

    #[test]
    fn three_word_cycle() {
        let chain = finder(&["кот", "топор", "рак"]).build_chain().unwrap();
        assert_eq!(chain, vec!["кот", "топор", "рак"]);
    }

    #[test]
    fn starts_from_first_word_letter() {
        let chain = finder(&["рак", "кот", "топор"]).build_chain().unwrap();
        assert_eq!(chain, vec!["рак", "кот", "топор"]);
    }

    #[test]
    fn single_self_loop() {
        assert_eq!(finder(&["а"]).build_chain().unwrap(), vec!["а"]);
    }

    #[test]
    fn parallel_words_taken_in_input_order() {
        let chain = finder(&["аб", "ба", "арб", "бура"]).build_chain().unwrap();
        assert_eq!(chain, vec!["аб", "ба", "арб", "бура"]);
    }

    #[test]
    fn open_trail_does_not_close() {
        let result = finder(&["аб", "бв", "вб"]).build_chain();
        assert_eq!(
            result,
            Err(ChainError::NotClosed {
                start: 'а',
                end: 'б'
            })
        );
    }

    #[test]
    fn disjoint_cycles_are_incomplete() {
        let result = finder(&["аб", "ба", "вг", "гв"]).build_chain();
        assert_eq!(
            result,
            Err(ChainError::Incomplete {
                visited: 2,
                expected: 4
            })
        );
    }

    #[test]
    fn classification_leaves_graph_intact() {
        let finder = finder(&["кот", "топор", "рак"]);
        assert_eq!(finder.find_start_node(), Ok('к'));
        assert_eq!(finder.hierholzer('к').len(), 4);
        assert_eq!(finder.graph().edge_index().remaining(), 3);
        assert!(finder.build_chain().is_ok());
    }
}
