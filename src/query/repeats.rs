//! Repeated substrings
//!
//! Every internal node other than the root has at least two leaves below
//! it, so its path occurs at least twice. The deepest such node spells the
//! longest repeated substring.

use crate::tree::{NodeId, SuffixTree};
use serde::Serialize;

/// A substring occurring more than once in the indexed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Repeat {
    /// Start of one occurrence
    pub position: usize,
    /// Length of the repeated substring
    pub len: usize,
    /// Number of (possibly overlapping) occurrences
    pub count: usize,
}

impl SuffixTree {
    fn repeat_at(&self, id: NodeId) -> Repeat {
        let node = self.node(id);
        Repeat {
            position: node.end as usize - node.depth(),
            len: node.depth(),
            count: node.leaf_count(),
        }
    }

    /// The longest substring occurring at least twice, if any.
    ///
    /// Ties go to the node created first during construction.
    pub fn longest_repeat(&self) -> Option<Repeat> {
        let mut best: Option<NodeId> = None;
        let mut best_depth = 0;

        for id in self.internal_nodes() {
            let depth = self.node(id).depth();
            if depth > best_depth {
                best = Some(id);
                best_depth = depth;
            }
        }

        best.map(|id| self.repeat_at(id))
    }

    /// Longest substring occurring at least twice; empty if no byte repeats
    pub fn longest_repeated_substring(&self) -> &[u8] {
        match self.longest_repeat() {
            Some(repeat) => &self.text()[repeat.position..repeat.position + repeat.len],
            None => &[],
        }
    }

    /// Every right-maximal repeat of at least `min_len` bytes, longest
    /// first (ties by position).
    ///
    /// A right-maximal repeat is a repeated substring whose occurrences are
    /// not all followed by the same byte.
    pub fn repeated_substrings(&self, min_len: usize) -> Vec<Repeat> {
        let min_len = min_len.max(1);
        let mut repeats: Vec<Repeat> = self
            .internal_nodes()
            .filter(|&id| self.node(id).depth() >= min_len)
            .map(|id| self.repeat_at(id))
            .collect();

        repeats.sort_unstable_by(|a, b| b.len.cmp(&a.len).then(a.position.cmp(&b.position)));
        repeats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_repeated_substring() {
        let cases: [(&str, &str); 6] = [
            ("mississippi", "issi"),
            ("abcabc", "abc"),
            ("banana", "ana"),
            ("aaaa", "aaa"),
            ("abcd", ""),
            ("", ""),
        ];

        for (text, expected) in cases {
            let tree = SuffixTree::build(text).unwrap();
            assert_eq!(
                tree.longest_repeated_substring(),
                expected.as_bytes(),
                "text {:?}",
                text
            );
        }
    }

    #[test]
    fn test_single_byte_text() {
        let tree = SuffixTree::build("x").unwrap();
        assert_eq!(tree.longest_repeat(), None);
        assert_eq!(tree.longest_repeated_substring(), b"");
    }

    #[test]
    fn test_longest_repeat_count() {
        let tree = SuffixTree::build("abcabc").unwrap();
        let repeat = tree.longest_repeat().unwrap();

        assert_eq!(repeat.len, 3);
        assert_eq!(repeat.count, 2);
        assert_eq!(&tree.text()[repeat.position..repeat.position + 3], b"abc");
    }

    #[test]
    fn test_repeated_substrings() {
        let tree = SuffixTree::build("banana").unwrap();
        let repeats = tree.repeated_substrings(1);

        let spelled: Vec<(&[u8], usize)> = repeats
            .iter()
            .map(|r| (&tree.text()[r.position..r.position + r.len], r.count))
            .collect();
        assert_eq!(
            spelled,
            vec![(&b"ana"[..], 2), (&b"na"[..], 2), (&b"a"[..], 3)]
        );

        assert_eq!(tree.repeated_substrings(3).len(), 1);
        assert!(tree.repeated_substrings(4).is_empty());
    }
}
