//! Longest common substring against a second text
//!
//! The second text is streamed through the tree once (matching
//! statistics). After each byte the cursor spells the longest suffix of
//! the scanned prefix that occurs in the indexed text. On a mismatch the
//! match loses its first byte by following a suffix link and re-descending
//! with skip-count, so the scan is O(n + m) overall.

use super::walk::Cursor;
use crate::tree::{Result, SuffixTree, ROOT};
use serde::Serialize;

/// Location of a longest common substring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonMatch {
    /// Start in the indexed text
    pub position: usize,
    /// Start in the second text
    pub other_position: usize,
    pub len: usize,
}

impl SuffixTree {
    /// Locate the longest substring shared with `other`.
    ///
    /// Returns `None` when nothing is shared (including when either text is
    /// empty). When several substrings share the maximal length, the one
    /// ending first in `other` wins.
    pub fn longest_common_match<P: AsRef<[u8]>>(&self, other: P) -> Result<Option<CommonMatch>> {
        let other = self.prepare(other.as_ref(), "second text")?;

        let mut cursor = Cursor::at(ROOT);
        let mut len = 0;
        let mut best: Option<CommonMatch> = None;

        for (j, &byte) in other.iter().enumerate() {
            loop {
                if let Some(next) = self.step(cursor, byte) {
                    cursor = next;
                    len += 1;
                    break;
                }
                if len == 0 {
                    break;
                }

                match self.shorten(cursor, &other[j - len..j]) {
                    Some(shorter) => {
                        cursor = shorter;
                        len -= 1;
                    }
                    None => {
                        cursor = Cursor::at(ROOT);
                        len = 0;
                    }
                }
            }

            if len > best.map_or(0, |m| m.len) {
                best = Some(CommonMatch {
                    position: self.cursor_end(cursor) - len,
                    other_position: j + 1 - len,
                    len,
                });
            }
        }

        Ok(best)
    }

    /// Longest substring of the indexed text that also occurs in `other`;
    /// empty if they share nothing
    pub fn longest_common_substring<P: AsRef<[u8]>>(&self, other: P) -> Result<&[u8]> {
        Ok(match self.longest_common_match(other)? {
            Some(m) => &self.text()[m.position..m.position + m.len],
            None => &[],
        })
    }

    /// Move from the point spelling `matched` to the point spelling
    /// `matched[1..]`.
    fn shorten(&self, cursor: Cursor, matched: &[u8]) -> Option<Cursor> {
        let link = if cursor.node == ROOT {
            None
        } else {
            self.node(cursor.node).suffix_link()
        };

        match link {
            // Only the part below the explicit node has to be walked again
            Some(link) => self.descend(link, &matched[matched.len() - cursor.offset..]),
            None => self.descend(ROOT, &matched[1..]),
        }
    }
}
