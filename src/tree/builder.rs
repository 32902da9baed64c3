//! Suffix tree builder
//!
//! Builds a suffix tree online in O(n) with Ukkonen's algorithm:
//! 1. The text is terminated with [`TERMINATOR`] and consumed one byte at a time
//! 2. Leaf edges stay open and grow together through a shared end counter
//! 3. An active point remembers where the next implicit suffix ends, so no
//!    extension restarts from the root
//! 4. Suffix links connect internal nodes created in the same phase
//!
//! Once the terminator is consumed every suffix ends at its own leaf, open
//! edges are closed and the arena is handed to [`SuffixTree`] read-only.

use super::error::{ensure_terminator_free, IndexError, Result};
use super::index::SuffixTree;
use super::types::*;
use crate::utils::progress::ProgressBar;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Number of phases between cancellation checks and progress updates
const CHECK_INTERVAL: usize = 4096;

/// End bound of an edge under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeEnd {
    Fixed(TextPosition),
    /// Leaf edge tracking the shared global end
    Open,
}

#[derive(Debug)]
struct BuildNode {
    start: TextPosition,
    end: EdgeEnd,
    children: FxHashMap<u8, NodeId>,
    suffix_link: Option<NodeId>,
    suffix_start: Option<TextPosition>,
}

/// Where the next extension happens: `length` bytes down the edge of `node`
/// that starts with `text[edge]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoint {
    node: NodeId,
    edge: usize,
    length: usize,
}

/// State of one in-progress construction
struct Construction<'t> {
    text: &'t [u8],
    nodes: Vec<BuildNode>,
    /// End of every open leaf edge (one past the last consumed byte)
    global_end: usize,
    active: ActivePoint,
    /// Suffixes still implicit after the last phase
    remainder: usize,
}

impl<'t> Construction<'t> {
    fn new(text: &'t [u8]) -> Self {
        // A text of n bytes yields at most 2n nodes
        let mut nodes = Vec::with_capacity(text.len() * 2);
        nodes.push(BuildNode {
            start: 0,
            end: EdgeEnd::Fixed(0),
            children: FxHashMap::default(),
            suffix_link: None,
            suffix_start: None,
        });

        Self {
            text,
            nodes,
            global_end: 0,
            active: ActivePoint {
                node: ROOT,
                edge: 0,
                length: 0,
            },
            remainder: 0,
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> &BuildNode {
        &self.nodes[id as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut BuildNode {
        &mut self.nodes[id as usize]
    }

    #[inline]
    fn edge_len(&self, id: NodeId) -> usize {
        let node = self.node(id);
        let end = match node.end {
            EdgeEnd::Fixed(end) => end as usize,
            EdgeEnd::Open => self.global_end,
        };
        end - node.start as usize
    }

    fn push_node(&mut self, node: BuildNode) -> NodeId {
        // Bounded by MAX_TEXT_LEN
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// New leaf for the suffix currently being made explicit
    fn new_leaf(&mut self, pos: usize) -> NodeId {
        let suffix_start = (pos + 1 - self.remainder) as TextPosition;
        self.push_node(BuildNode {
            start: pos as TextPosition,
            end: EdgeEnd::Open,
            children: FxHashMap::default(),
            suffix_link: None,
            suffix_start: Some(suffix_start),
        })
    }

    /// New internal node; its link defaults to the root until a later
    /// extension in the same phase resolves it
    fn new_internal(&mut self, start: usize, end: usize) -> NodeId {
        self.push_node(BuildNode {
            start: start as TextPosition,
            end: EdgeEnd::Fixed(end as TextPosition),
            children: FxHashMap::default(),
            suffix_link: Some(ROOT),
            suffix_start: None,
        })
    }

    /// Skip-count walk: jump over `next` entirely if the active length
    /// covers its whole edge. Returns true if the active point moved.
    fn walk_down(&mut self, next: NodeId) -> bool {
        let len = self.edge_len(next);
        if self.active.length >= len {
            self.active.edge += len;
            self.active.length -= len;
            self.active.node = next;
            true
        } else {
            false
        }
    }

    /// Run one phase: make every implicit suffix ending at `pos - 1` end at `pos`
    fn extend(&mut self, pos: usize) {
        let byte = self.text[pos];
        // Rule 1: every open leaf edge grows here
        self.global_end = pos + 1;
        self.remainder += 1;

        let mut pending_link: Option<NodeId> = None;

        while self.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = pos;
            }

            let active = self.active;
            let edge_byte = self.text[active.edge];

            match self.node(active.node).children.get(&edge_byte).copied() {
                None => {
                    let leaf = self.new_leaf(pos);
                    self.node_mut(active.node).children.insert(edge_byte, leaf);

                    if let Some(prev) = pending_link.take() {
                        self.node_mut(prev).suffix_link = Some(active.node);
                    }
                }
                Some(next) => {
                    if self.walk_down(next) {
                        continue;
                    }

                    let next_start = self.node(next).start as usize;

                    // Rule 3: already present, so every shorter suffix is too
                    if self.text[next_start + active.length] == byte {
                        if let Some(prev) = pending_link.take() {
                            self.node_mut(prev).suffix_link = Some(active.node);
                        }
                        self.active.length += 1;
                        break;
                    }

                    // Rule 2: split the edge and hang a new leaf off the split
                    let split = self.new_internal(next_start, next_start + active.length);
                    self.node_mut(active.node).children.insert(edge_byte, split);

                    let leaf = self.new_leaf(pos);
                    self.node_mut(split).children.insert(byte, leaf);

                    let moved_start = next_start + active.length;
                    self.node_mut(next).start = moved_start as TextPosition;
                    let moved_byte = self.text[moved_start];
                    self.node_mut(split).children.insert(moved_byte, next);

                    if let Some(prev) = pending_link.replace(split) {
                        self.node_mut(prev).suffix_link = Some(split);
                    }
                }
            }

            self.remainder -= 1;

            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = pos + 1 - self.remainder;
            } else if self.active.node != ROOT {
                self.active.node = self.node(self.active.node).suffix_link.unwrap_or(ROOT);
            }
        }

        trace!(
            pos,
            remainder = self.remainder,
            active_node = self.active.node,
            active_length = self.active.length,
            "phase done"
        );
    }

    /// Close every open edge and convert to the read-only node layout
    fn finish(self) -> Vec<Node> {
        let end = self.text.len() as TextPosition;
        self.nodes
            .into_iter()
            .map(|node| Node {
                start: node.start,
                end: match node.end {
                    EdgeEnd::Fixed(fixed) => fixed,
                    EdgeEnd::Open => end,
                },
                children: node.children,
                suffix_link: node.suffix_link,
                suffix_start: node.suffix_start,
                depth: 0,
                leaf_count: 0,
            })
            .collect()
    }
}

/// Builder for constructing suffix trees from a text
///
/// A builder only holds configuration; each call to [`build`](Self::build)
/// owns its own construction state, so one builder may be reused.
#[derive(Clone, Default)]
pub struct SuffixTreeBuilder {
    config: TreeConfig,
    cancel: Option<Arc<AtomicBool>>,
    progress: Option<ProgressBar>,
}

impl SuffixTreeBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            cancel: None,
            progress: None,
        }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(TreeConfig::default())
    }

    /// Stop construction once `flag` is set.
    ///
    /// The flag is polled every few thousand characters.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Report construction progress (in characters) on `bar`
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Build a suffix tree over `text`.
    ///
    /// Fails with [`IndexError::InvalidInput`] if the text contains the
    /// terminator or exceeds the configured length, before any node exists.
    #[tracing::instrument(skip_all, fields(len = text.len()))]
    pub fn build(&self, text: &[u8]) -> Result<SuffixTree> {
        let max_len = self.config.effective_max_text_len();
        if text.len() > max_len {
            return Err(IndexError::InvalidInput(format!(
                "text is {} bytes, limit is {}",
                text.len(),
                max_len
            )));
        }
        ensure_terminator_free(text, "text")?;

        let mut buf = Vec::with_capacity(text.len() + 1);
        if self.config.case_insensitive {
            buf.extend(text.iter().map(|b| b.to_ascii_lowercase()));
        } else {
            buf.extend_from_slice(text);
        }
        buf.push(TERMINATOR);

        let mut construction = Construction::new(&buf);
        for pos in 0..buf.len() {
            if pos > 0 && pos % CHECK_INTERVAL == 0 {
                self.checkpoint(pos, text.len())?;
            }
            construction.extend(pos);
        }
        debug_assert_eq!(construction.remainder, 0);

        let nodes = construction.finish();
        if let Some(bar) = &self.progress {
            bar.inc((buf.len() % CHECK_INTERVAL) as u64);
            bar.finish_and_clear();
        }

        debug!(text_len = text.len(), nodes = nodes.len(), "suffix tree built");

        Ok(SuffixTree::assemble(buf, nodes, self.config.clone()))
    }

    fn checkpoint(&self, processed: usize, total: usize) -> Result<()> {
        if let Some(bar) = &self.progress {
            bar.inc(CHECK_INTERVAL as u64);
        }

        let cancelled = self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        if cancelled {
            if let Some(bar) = &self.progress {
                bar.finish_and_clear();
            }
            debug!(processed, total, "suffix tree construction cancelled");
            return Err(IndexError::Cancelled { processed, total });
        }

        Ok(())
    }
}
