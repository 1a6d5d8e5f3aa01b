//! Incremental graph builder.

use std::collections::HashMap;

use tracing::debug;
use wc_core::{Letter, TerminalRule, WcResult, WordId};

use crate::graph::Graph;
use crate::indexing::EdgeIndex;

/// Builder for constructing a graph word by word.
///
/// Use `add_word` to insert edges in input order, then call `build()` to
/// check the degree invariants and freeze the result into a `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    rule: TerminalRule,
    words: Vec<String>,
    vertices: Vec<Letter>,
    adjacency: HashMap<Letter, Vec<Letter>>,
    out_degree: HashMap<Letter, usize>,
    in_degree: HashMap<Letter, usize>,
    edges: EdgeIndex,
}

impl GraphBuilder {
    /// Create a new empty builder using the default soft-sign rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty builder with a custom terminal-letter rule.
    pub fn with_rule(rule: TerminalRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    /// Add a word as an edge and return its ID.
    ///
    /// Nothing is deduplicated: adding the same word twice yields two
    /// parallel edges with distinct IDs.
    pub fn add_word(&mut self, word: impl Into<String>) -> WcResult<WordId> {
        let word = word.into();
        let (from, to) = self.rule.normalize(&word)?;
        let id = WordId::try_from_usize(self.words.len())?;

        self.touch(from);
        self.touch(to);
        self.adjacency.entry(from).or_default().push(to);
        *self.out_degree.entry(from).or_default() += 1;
        *self.in_degree.entry(to).or_default() += 1;
        self.edges.insert(from, to, id);
        self.words.push(word);

        Ok(id)
    }

    /// Add every word of `words`, in order.
    pub fn extend_words<I, S>(&mut self, words: I) -> WcResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.add_word(word)?;
        }
        Ok(())
    }

    /// Number of words added so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check the invariants and return an immutable `Graph`.
    pub fn build(self) -> WcResult<Graph> {
        let graph = Graph {
            words: self.words,
            vertices: self.vertices,
            adjacency: self.adjacency,
            out_degree: self.out_degree,
            in_degree: self.in_degree,
            edges: self.edges,
            rule: self.rule,
        };
        graph.check_degrees()?;

        debug!(
            words = graph.edge_count(),
            vertices = graph.vertices().len(),
            transitions = graph.edge_index().transition_count(),
            "built transition graph"
        );
        Ok(graph)
    }

    /// Record a vertex the first time it is seen.
    fn touch(&mut self, letter: Letter) {
        if !self.out_degree.contains_key(&letter) && !self.in_degree.contains_key(&letter) {
            self.vertices.push(letter);
            // Keep every vertex present in both counters
            self.out_degree.insert(letter, 0);
            self.in_degree.insert(letter, 0);
        }
    }
}

/// Build a graph from `words` in one pass with the default rule.
pub fn build_graph<I, S>(words: I) -> WcResult<Graph>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = GraphBuilder::new();
    builder.extend_words(words)?;
    builder.build()
}
