//! The built, read-only suffix tree
//!
//! [`SuffixTree`] owns the terminated text and the node arena. It is never
//! mutated after construction, so it is `Send + Sync` and any number of
//! queries may run against it at once.

use super::builder::SuffixTreeBuilder;
use super::error::{ensure_terminator_free, Result};
use super::types::*;
use rayon::prelude::*;
use std::borrow::Cow;

/// Suffix tree over a single text
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Indexed text followed by the terminator (case-folded if configured)
    text: Vec<u8>,
    /// Node arena, root first
    nodes: Vec<Node>,
    /// Configuration used for building
    config: TreeConfig,
}

impl SuffixTree {
    /// Build a suffix tree with default configuration
    pub fn build<T: AsRef<[u8]>>(text: T) -> Result<Self> {
        SuffixTreeBuilder::with_defaults().build(text.as_ref())
    }

    /// Build a suffix tree with the given configuration
    pub fn build_with_config<T: AsRef<[u8]>>(text: T, config: TreeConfig) -> Result<Self> {
        SuffixTreeBuilder::new(config).build(text.as_ref())
    }

    /// Build one independent tree per text in parallel.
    ///
    /// Trees are returned in input order. The first invalid text fails the
    /// whole batch.
    pub fn build_many<T: AsRef<[u8]> + Sync>(texts: &[T], config: &TreeConfig) -> Result<Vec<Self>> {
        texts
            .par_iter()
            .map(|text| SuffixTreeBuilder::new(config.clone()).build(text.as_ref()))
            .collect()
    }

    /// Wrap a finished arena and annotate string depths and leaf counts
    pub(crate) fn assemble(text: Vec<u8>, mut nodes: Vec<Node>, config: TreeConfig) -> Self {
        let mut parent: Vec<NodeId> = vec![ROOT; nodes.len()];
        let mut order: Vec<NodeId> = Vec::with_capacity(nodes.len());
        let mut stack = vec![ROOT];
        let mut children: Vec<NodeId> = Vec::new();

        // Pre-order: parents before children
        while let Some(id) = stack.pop() {
            order.push(id);

            let depth = nodes[id as usize].depth;
            children.clear();
            children.extend(nodes[id as usize].children.values().copied());

            for &child in &children {
                let node = &mut nodes[child as usize];
                node.depth = depth + (node.end - node.start);
                parent[child as usize] = id;
                stack.push(child);
            }
        }

        // Reverse pre-order: children before parents
        for &id in order.iter().rev() {
            if nodes[id as usize].is_leaf() {
                nodes[id as usize].leaf_count = 1;
            }
            if id != ROOT {
                let count = nodes[id as usize].leaf_count;
                nodes[parent[id as usize] as usize].leaf_count += count;
            }
        }

        Self { text, nodes, config }
    }

    /// The indexed text (without terminator)
    pub fn text(&self) -> &[u8] {
        &self.text[..self.text.len() - 1]
    }

    /// Text including the trailing terminator
    #[inline]
    pub(crate) fn terminated_text(&self) -> &[u8] {
        &self.text
    }

    /// Length of the indexed text
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn root(&self) -> &Node {
        self.node(ROOT)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Ids of every internal node except the root
    pub(crate) fn internal_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, node)| !node.is_leaf())
            .map(|(id, _)| id as NodeId)
    }

    /// Label of the edge leading into `id`
    #[inline]
    pub fn edge_label(&self, id: NodeId) -> &[u8] {
        let node = self.node(id);
        &self.text[node.start as usize..node.end as usize]
    }

    /// String spelled from the root to `id`.
    ///
    /// Every edge label sits in the text right after an occurrence of its
    /// parent's path, so the path ends where the incoming edge ends.
    pub fn path_label(&self, id: NodeId) -> &[u8] {
        let node = self.node(id);
        let end = node.end as usize;
        &self.text[end - node.depth()..end]
    }

    /// Validate a caller-supplied pattern and apply case folding
    pub(crate) fn prepare<'p>(&self, pattern: &'p [u8], what: &str) -> Result<Cow<'p, [u8]>> {
        ensure_terminator_free(pattern, what)?;
        if self.config.case_insensitive && pattern.iter().any(u8::is_ascii_uppercase) {
            Ok(Cow::Owned(pattern.to_ascii_lowercase()))
        } else {
            Ok(Cow::Borrowed(pattern))
        }
    }

    /// Get statistics about this tree
    pub fn stats(&self) -> TreeStats {
        let mut internal_count = 0;
        let mut leaf_count = 0;
        let mut suffix_link_count = 0;
        let mut max_repeat_len: usize = 0;

        for node in self.nodes.iter().skip(1) {
            if node.is_leaf() {
                leaf_count += 1;
            } else {
                internal_count += 1;
                max_repeat_len = max_repeat_len.max(node.depth());
            }
            if node.suffix_link.is_some() {
                suffix_link_count += 1;
            }
        }

        TreeStats {
            text_len: self.len(),
            node_count: self.nodes.len(),
            internal_count,
            leaf_count,
            suffix_link_count,
            max_repeat_len,
            case_insensitive: self.config.case_insensitive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depths_and_leaf_counts() {
        let tree = SuffixTree::build("banana").unwrap();

        assert_eq!(tree.root().depth(), 0);
        // All 7 suffixes of "banana\0"
        assert_eq!(tree.root().leaf_count(), 7);

        let a = tree.root().child(b'a').unwrap();
        assert_eq!(tree.path_label(a), b"a");
        assert_eq!(tree.node(a).leaf_count(), 3);

        let ana = tree.node(a).child(b'n').unwrap();
        assert_eq!(tree.path_label(ana), b"ana");
        assert_eq!(tree.node(ana).depth(), 3);
        assert_eq!(tree.node(ana).leaf_count(), 2);
    }

    #[test]
    fn test_leaf_path_is_suffix() {
        let tree = SuffixTree::build("mississippi").unwrap();
        let terminated = tree.terminated_text();

        for id in 0..tree.node_count() as NodeId {
            if let Some(start) = tree.node(id).suffix_start() {
                assert_eq!(tree.path_label(id), &terminated[start..]);
            }
        }
    }

    #[test]
    fn test_text_accessors() {
        let tree = SuffixTree::build("acgt").unwrap();
        assert_eq!(tree.text(), b"acgt");
        assert_eq!(tree.len(), 4);
        assert!(!tree.is_empty());

        let empty = SuffixTree::build("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.text(), b"");
    }

    #[test]
    fn test_stats() {
        let stats = SuffixTree::build("abcabc").unwrap().stats();

        assert_eq!(stats.text_len, 6);
        assert_eq!(stats.leaf_count, 7);
        assert_eq!(stats.node_count, 1 + stats.internal_count + stats.leaf_count);
        assert_eq!(stats.suffix_link_count, stats.internal_count);
        assert_eq!(stats.max_repeat_len, 3);
        assert!(!stats.case_insensitive);
    }

    #[test]
    fn test_build_many_preserves_order() {
        let texts = ["banana", "abcabc", "", "aaaa"];
        let trees = SuffixTree::build_many(&texts, &TreeConfig::default()).unwrap();

        assert_eq!(trees.len(), texts.len());
        for (tree, text) in trees.iter().zip(texts) {
            assert_eq!(tree.text(), text.as_bytes());
        }
    }

    #[test]
    fn test_build_many_rejects_invalid() {
        let texts = vec![b"ok".to_vec(), b"bad\x00".to_vec()];
        let err = SuffixTree::build_many(&texts, &TreeConfig::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_prepare_folds_case() {
        let tree = SuffixTree::build_with_config(
            "acgt",
            TreeConfig {
                case_insensitive: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(&*tree.prepare(b"ACgT", "pattern").unwrap(), b"acgt");
        assert!(tree.prepare(b"a\x00", "pattern").is_err());
    }
}
