//! Substring queries: containment, counting and occurrence enumeration
//!
//! All three walk from the root to the node below which every occurrence
//! of the pattern hangs. Counting reads the leaf count stored on that node;
//! enumeration visits its leaves.
//!
//! Positions come back in tree order, not text order. Sort them if order
//! matters.

use crate::tree::{NodeId, Result, SuffixTree};
use rayon::prelude::*;
use roaring::RoaringBitmap;

impl SuffixTree {
    /// Check if `pattern` occurs in the text.
    ///
    /// The empty pattern is contained in every text, including the empty one.
    pub fn contains<P: AsRef<[u8]>>(&self, pattern: P) -> Result<bool> {
        let pattern = self.prepare(pattern.as_ref(), "pattern")?;
        Ok(self.locate(&pattern).is_some())
    }

    /// Number of (possibly overlapping) occurrences of `pattern`.
    ///
    /// The empty pattern occurs once per text position.
    pub fn count_occurrences<P: AsRef<[u8]>>(&self, pattern: P) -> Result<usize> {
        let pattern = self.prepare(pattern.as_ref(), "pattern")?;
        if pattern.is_empty() {
            return Ok(self.len());
        }

        Ok(self
            .locate(&pattern)
            .map_or(0, |node| self.node(node).leaf_count()))
    }

    /// Start positions of every occurrence of `pattern`, unordered.
    ///
    /// Overlapping occurrences are reported separately. The empty pattern
    /// yields every position `0..len`.
    pub fn find_all_occurrences<P: AsRef<[u8]>>(&self, pattern: P) -> Result<Vec<usize>> {
        let pattern = self.prepare(pattern.as_ref(), "pattern")?;
        if pattern.is_empty() {
            return Ok((0..self.len()).collect());
        }

        let mut positions = Vec::new();
        if let Some(node) = self.locate(&pattern) {
            positions.reserve(self.node(node).leaf_count());
            self.collect_leaves(node, &mut positions);
        }
        Ok(positions)
    }

    /// Start positions of every occurrence of `pattern` as a bitmap
    pub fn occurrence_set<P: AsRef<[u8]>>(&self, pattern: P) -> Result<RoaringBitmap> {
        let positions = self.find_all_occurrences(pattern)?;
        // Text positions fit in u32 (see MAX_TEXT_LEN)
        Ok(positions.into_iter().map(|p| p as u32).collect())
    }

    /// Count many patterns in parallel; results follow input order
    pub fn count_batch<P: AsRef<[u8]> + Sync>(&self, patterns: &[P]) -> Result<Vec<usize>> {
        patterns
            .par_iter()
            .map(|pattern| self.count_occurrences(pattern))
            .collect()
    }

    /// Find every occurrence of many patterns in parallel; results follow
    /// input order
    pub fn find_all_batch<P: AsRef<[u8]> + Sync>(&self, patterns: &[P]) -> Result<Vec<Vec<usize>>> {
        patterns
            .par_iter()
            .map(|pattern| self.find_all_occurrences(pattern))
            .collect()
    }

    /// Push the suffix start of every leaf below `node`
    pub(crate) fn collect_leaves(&self, node: NodeId, out: &mut Vec<usize>) {
        let mut stack = vec![node];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            match node.suffix_start() {
                Some(start) => out.push(start),
                None => stack.extend(node.children.values().copied()),
            }
        }
    }
}
