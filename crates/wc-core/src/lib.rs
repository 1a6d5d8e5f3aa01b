//! wc-core: stable foundation for wordchain.
//!
//! Contains:
//! - ids (compact word identifiers for graph edges)
//! - letter (transition-letter extraction)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod letter;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WcError, WcResult};
pub use ids::*;
pub use letter::{Letter, SOFT_SIGN, TerminalRule, normalize};
