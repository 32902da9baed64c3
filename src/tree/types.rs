//! Types for suffix tree indexing
//!
//! The tree is stored as an arena of [`Node`]s addressed by [`NodeId`].
//! Every node except the root owns the label of the edge leading into it,
//! stored as a half-open interval `[start, end)` into the terminated text.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Index of a node in the tree arena
pub type NodeId = u32;

/// Position in the indexed text
pub type TextPosition = u32;

/// The root node is always the first node in the arena
pub const ROOT: NodeId = 0;

/// Reserved byte appended to every indexed text.
/// It may not appear in texts, patterns or second texts.
pub const TERMINATOR: u8 = 0x00;

/// Largest text length that can be indexed.
///
/// A terminated text of n + 1 bytes yields at most 2(n + 1) nodes, all of
/// which must be addressable by a [`NodeId`].
pub const MAX_TEXT_LEN: usize = u32::MAX as usize / 2 - 1;

/// A node of a built suffix tree
///
/// `start..end` is the label of the edge from the parent into this node.
/// For the root the interval is empty.
#[derive(Debug, Clone)]
pub struct Node {
    /// Start of the incoming edge label (inclusive)
    pub(crate) start: TextPosition,
    /// End of the incoming edge label (exclusive)
    pub(crate) end: TextPosition,
    /// Outgoing edges keyed by the first byte of their label
    pub(crate) children: FxHashMap<u8, NodeId>,
    /// Node spelling this node's string minus its first byte
    pub(crate) suffix_link: Option<NodeId>,
    /// Start of the suffix ending at this leaf (`None` for internal nodes)
    pub(crate) suffix_start: Option<TextPosition>,
    /// Length of the string spelled from the root to this node
    pub(crate) depth: u32,
    /// Number of leaves in the subtree rooted here
    pub(crate) leaf_count: u32,
}

impl Node {
    /// Length of the incoming edge label
    #[inline]
    pub fn edge_len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// String depth of this node
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    /// Number of suffixes passing through this node
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count as usize
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.suffix_start.is_some()
    }

    /// Child whose edge label starts with `byte`
    #[inline]
    pub fn child(&self, byte: u8) -> Option<NodeId> {
        self.children.get(&byte).copied()
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Start position of the suffix this leaf terminates
    pub fn suffix_start(&self) -> Option<usize> {
        self.suffix_start.map(|p| p as usize)
    }
}

/// Configuration for suffix tree building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Fold ASCII letters to lowercase in texts and patterns (default: false)
    #[serde(default)]
    pub case_insensitive: bool,
    /// Reject texts longer than this many bytes (default and cap: MAX_TEXT_LEN)
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,
}

fn default_max_text_len() -> usize {
    MAX_TEXT_LEN
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            max_text_len: default_max_text_len(),
        }
    }
}

impl TreeConfig {
    /// Configured length limit, clamped to what node positions can address
    pub fn effective_max_text_len(&self) -> usize {
        self.max_text_len.min(MAX_TEXT_LEN)
    }
}

/// Statistics about a built suffix tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Length of the indexed text (without terminator)
    pub text_len: usize,
    /// Total number of nodes including the root
    pub node_count: usize,
    /// Internal nodes excluding the root
    pub internal_count: usize,
    /// Leaves, one per suffix of the terminated text
    pub leaf_count: usize,
    /// Internal nodes carrying a suffix link
    pub suffix_link_count: usize,
    /// Deepest internal node (length of the longest repeated substring)
    pub max_repeat_len: usize,
    /// Whether the text was case-folded
    pub case_insensitive: bool,
}
