//! # SFX - Linear-Time Suffix Tree Index
//!
//! SFX builds a suffix tree over a text in O(n) with Ukkonen's online
//! algorithm and answers substring queries against it without rescanning
//! the text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Node/edge model, online construction, the built index
//! - [`query`] - Containment, counting, occurrence enumeration, repeats and
//!   longest common substring
//! - [`output`] - Result formatting for the `sfx` binary
//! - [`utils`] - Configuration, input loading, progress bars
//!
//! ## Quick Start
//!
//! ```
//! use sfx::SuffixTree;
//!
//! let tree = SuffixTree::build("mississippi").unwrap();
//!
//! assert!(tree.contains("issi").unwrap());
//! assert_eq!(tree.count_occurrences("issi").unwrap(), 2);
//!
//! let mut positions = tree.find_all_occurrences("issi").unwrap();
//! positions.sort_unstable();
//! assert_eq!(positions, vec![1, 4]);
//!
//! assert_eq!(tree.longest_repeated_substring(), b"issi");
//! assert_eq!(tree.longest_common_substring("missouri").unwrap(), b"miss");
//! ```
//!
//! ## Concurrency
//!
//! Each build owns its construction state, so independent builds can run on
//! separate threads ([`SuffixTree::build_many`]). A built tree is immutable
//! and can be shared freely between threads for querying.

pub mod output;
pub mod query;
pub mod tree;
pub mod utils;

pub use query::{CommonMatch, Repeat};
pub use tree::{IndexError, Result, SuffixTree, SuffixTreeBuilder, TreeConfig, TreeStats};
