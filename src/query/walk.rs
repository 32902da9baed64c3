//! Walking the tree along a string
//!
//! A [`Cursor`] marks a point in the tree that may fall inside an edge.
//! Pattern lookups compare whole edge labels at a time; descents over
//! strings already known to be present use the skip-count trick and only
//! look at the first byte of each edge.

use crate::tree::{NodeId, SuffixTree, ROOT};

/// A point in the tree: `offset` bytes down the edge into `edge`, or the
/// explicit node `node` when `edge` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    /// Deepest explicit node at or above the point
    pub node: NodeId,
    pub edge: Option<NodeId>,
    /// Bytes consumed on `edge` (always less than its length)
    pub offset: usize,
}

impl Cursor {
    pub fn at(node: NodeId) -> Self {
        Self {
            node,
            edge: None,
            offset: 0,
        }
    }
}

impl SuffixTree {
    /// Find the highest node whose path starts with `pattern`.
    ///
    /// Every occurrence of `pattern` is a leaf below the returned node.
    /// Returns `None` if the pattern does not occur.
    pub(crate) fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let mut node = ROOT;
        let mut rest = pattern;

        while let Some(&first) = rest.first() {
            let child = self.node(node).child(first)?;
            let label = self.edge_label(child);

            // Consume the whole edge, or what is left of the pattern
            let take = label.len().min(rest.len());
            if label[..take] != rest[..take] {
                return None;
            }

            rest = &rest[take..];
            node = child;
        }

        Some(node)
    }

    /// Skip-count descent from `from` along `s`, which must be spelled
    /// below `from`. Only the first byte of each edge is inspected.
    ///
    /// Returns `None` if a needed edge is missing.
    pub(crate) fn descend(&self, from: NodeId, s: &[u8]) -> Option<Cursor> {
        let mut node = from;
        let mut rest = s;

        while let Some(&first) = rest.first() {
            let child = self.node(node).child(first)?;
            let len = self.node(child).edge_len();

            if rest.len() < len {
                return Some(Cursor {
                    node,
                    edge: Some(child),
                    offset: rest.len(),
                });
            }

            rest = &rest[len..];
            node = child;
        }

        Some(Cursor::at(node))
    }

    /// Advance `cursor` by one byte if the tree continues with `byte`
    pub(crate) fn step(&self, cursor: Cursor, byte: u8) -> Option<Cursor> {
        let (edge, offset) = match cursor.edge {
            None => (self.node(cursor.node).child(byte)?, 1),
            Some(edge) => {
                let pos = self.node(edge).start as usize + cursor.offset;
                if self.terminated_text()[pos] != byte {
                    return None;
                }
                (edge, cursor.offset + 1)
            }
        };

        if offset == self.node(edge).edge_len() {
            Some(Cursor::at(edge))
        } else {
            Some(Cursor {
                node: cursor.node,
                edge: Some(edge),
                offset,
            })
        }
    }

    /// Text position (exclusive) where the string spelled by `cursor` ends
    pub(crate) fn cursor_end(&self, cursor: Cursor) -> usize {
        match cursor.edge {
            Some(edge) => self.node(edge).start as usize + cursor.offset,
            None => self.node(cursor.node).end as usize,
        }
    }
}
