//! Query layer
//!
//! Read-only operations on a built [`SuffixTree`](crate::tree::SuffixTree),
//! added as inherent methods:
//!
//! - `search`: containment, occurrence counting and enumeration
//! - `repeats`: longest repeated substring and right-maximal repeats
//! - `common`: longest common substring against a second text
//! - `walk`: shared descent helpers

pub mod common;
pub mod repeats;
pub mod search;
mod walk;

pub use common::CommonMatch;
pub use repeats::Repeat;
