//! Graph consistency checks.

use wc_core::WcResult;

use crate::error::GraphError;
use crate::graph::Graph;

/// Summed out-degree, summed in-degree and word count must all agree.
pub(crate) fn validate_degrees(graph: &Graph) -> WcResult<()> {
    let out_total: usize = graph.out_degree.values().sum();
    let in_total: usize = graph.in_degree.values().sum();
    let words = graph.words.len();

    if out_total != words || in_total != words {
        return Err(GraphError::DegreeSumMismatch {
            out_total,
            in_total,
            words,
        }
        .into());
    }

    // Adjacency must agree with the counters it was built alongside
    for (&from, dests) in &graph.adjacency {
        if dests.len() != graph.out_degree(from) {
            return Err(GraphError::AdjacencyMismatch {
                letter: from,
                listed: dests.len(),
                out_degree: graph.out_degree(from),
            }
            .into());
        }
    }

    Ok(())
}

/// Every word is filed exactly once, under the transition it realizes.
pub(crate) fn validate_edge_index(graph: &Graph) -> WcResult<()> {
    let words = graph.words.len();
    let indexed = graph.edges.remaining();
    if indexed != words {
        return Err(GraphError::EdgeCountMismatch { indexed, words }.into());
    }

    let mut seen = vec![false; words];
    for (bucket, ids) in graph.edges.iter() {
        for &id in ids {
            let word = graph.try_word(id)?;
            if graph.rule.normalize(word)? != bucket {
                return Err(GraphError::MisfiledWord { word: id, bucket }.into());
            }
            // Duplicate filing of the same id
            if std::mem::replace(&mut seen[id.slot()], true) {
                return Err(GraphError::EdgeCountMismatch { indexed, words }.into());
            }
        }
    }

    Ok(())
}
