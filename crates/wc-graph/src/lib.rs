//! wc-graph: letter-transition multigraph for wordchain.
//!
//! Provides:
//! - Core graph data structure (vertices, adjacency, degree counters)
//! - Incremental graph builder with invariant checks
//! - Edge index mapping each transition to the words realizing it
//!
//! # Example
//!
//! ```
//! use wc_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_word("кот").unwrap();
//! builder.add_word("топор").unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.out_degree('к'), 1);
//! assert_eq!(graph.in_degree('р'), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{GraphBuilder, build_graph};
pub use error::GraphError;
pub use graph::Graph;
pub use indexing::EdgeIndex;
