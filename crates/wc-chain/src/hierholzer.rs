//! Iterative Hierholzer construction of an Eulerian trail.

use std::collections::{HashMap, VecDeque};

use tracing::trace;
use wc_core::Letter;
use wc_graph::Graph;

/// Walk every edge reachable from `start` exactly once.
///
/// Works on a private copy of the adjacency, consuming each letter's
/// outgoing edges in the order the words were added. Returns the letters of
/// the trail in order; a trail over `E` edges has `E + 1` letters. If the
/// graph is not connected the trail covers only `start`'s component.
pub fn hierholzer(graph: &Graph, start: Letter) -> Vec<Letter> {
    let mut remaining: HashMap<Letter, VecDeque<Letter>> = graph
        .vertices()
        .iter()
        .map(|&v| (v, graph.neighbors(v).iter().copied().collect()))
        .collect();

    let mut stack = vec![start];
    let mut trail = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&top) = stack.last() {
        match remaining.get_mut(&top).and_then(VecDeque::pop_front) {
            Some(next) => stack.push(next),
            None => {
                stack.pop();
                trail.push(top);
            }
        }
    }

    trail.reverse();
    trace!(len = trail.len(), "hierholzer trail");
    trail
}
