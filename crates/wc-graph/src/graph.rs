//! Core graph data structure.

use std::collections::HashMap;

use wc_core::{Letter, TerminalRule, WcResult, WordId};

use crate::error::GraphError;
use crate::indexing::EdgeIndex;
use crate::validate;

/// Letter-transition multigraph.
///
/// Every word is one edge from its first letter to its terminal letter.
/// The graph stores:
/// - The words themselves, addressed by `WordId`.
/// - Vertices in first-seen order.
/// - Adjacency: for each letter, destinations in word order (one per word).
/// - Out/in degree counters, maintained only while building.
/// - The edge index used to turn a letter walk back into words.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) words: Vec<String>,
    pub(crate) vertices: Vec<Letter>,
    pub(crate) adjacency: HashMap<Letter, Vec<Letter>>,
    pub(crate) out_degree: HashMap<Letter, usize>,
    pub(crate) in_degree: HashMap<Letter, usize>,
    pub(crate) edges: EdgeIndex,
    pub(crate) rule: TerminalRule,
}

impl Graph {
    /// All words, in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get a word by ID (returns None if ID out of bounds).
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id.slot()).map(String::as_str)
    }

    /// Get a word by ID, failing with `GraphError::WordNotFound`.
    pub fn try_word(&self, id: WordId) -> Result<&str, GraphError> {
        self.word(id).ok_or(GraphError::WordNotFound { word: id })
    }

    /// Vertices in the order they were first seen.
    pub fn vertices(&self) -> &[Letter] {
        &self.vertices
    }

    /// Destinations reachable from `letter`, one entry per word, in word order.
    pub fn neighbors(&self, letter: Letter) -> &[Letter] {
        self.adjacency.get(&letter).map_or(&[], Vec::as_slice)
    }

    pub fn out_degree(&self, letter: Letter) -> usize {
        self.out_degree.get(&letter).copied().unwrap_or(0)
    }

    pub fn in_degree(&self, letter: Letter) -> usize {
        self.in_degree.get(&letter).copied().unwrap_or(0)
    }

    /// Number of edges, i.e. input words.
    pub fn edge_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn edge_index(&self) -> &EdgeIndex {
        &self.edges
    }

    /// Terminal-letter rule the graph was built with.
    pub fn rule(&self) -> &TerminalRule {
        &self.rule
    }

    /// Re-check the degree and edge-index invariants.
    pub fn check_degrees(&self) -> WcResult<()> {
        validate::validate_degrees(self)?;
        validate::validate_edge_index(self)?;
        Ok(())
    }

    /// Give up the graph, keeping only its words and the consumable edge index.
    pub fn into_edge_index(self) -> (Vec<String>, EdgeIndex) {
        (self.words, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::build_graph;

    #[test]
    fn accessors_on_unknown_letter() {
        let graph = build_graph(["кот"]).unwrap();
        assert!(graph.neighbors('я').is_empty());
        assert_eq!(graph.out_degree('я'), 0);
        assert_eq!(graph.in_degree('я'), 0);
    }

    #[test]
    fn word_lookup() {
        let graph = build_graph(["кот", "топор"]).unwrap();
        let id = wc_core::WordId::from_index(1);
        assert_eq!(graph.word(id), Some("топор"));
        assert!(graph.try_word(wc_core::WordId::from_index(9)).is_err());
    }

    #[test]
    fn into_edge_index_keeps_all_words() {
        let graph = build_graph(["кот", "топор", "рак"]).unwrap();
        let (words, index) = graph.into_edge_index();
        assert_eq!(words.len(), 3);
        assert_eq!(index.remaining(), 3);
    }
}
