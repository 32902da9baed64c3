//! Suffix tree construction module
//!
//! This module builds a suffix tree over a single text in linear time and
//! owns the resulting read-only node arena.
//!
//! ## Architecture
//!
//! - `types`: Node/edge model, configuration and statistics
//! - `error`: Error taxonomy shared with the query layer
//! - `builder`: Online (Ukkonen) construction
//! - `index`: The immutable built tree
//!
//! ## Layout
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`], so child
//! edges and suffix links are plain integers. Each node stores the label of
//! its incoming edge as a `[start, end)` interval into the terminated text.

pub mod builder;
pub mod error;
pub mod index;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use error::{IndexError, Result};
pub use index::SuffixTree;
pub use types::{Node, NodeId, TextPosition, TreeConfig, TreeStats, MAX_TEXT_LEN, ROOT, TERMINATOR};
