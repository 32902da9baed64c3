//! Loading texts to index from disk

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Bytes of a loaded text, either mapped straight from the file or owned
#[derive(Debug)]
pub enum InputText {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for InputText {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputText::Mapped(mmap) => mmap,
            InputText::Owned(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for InputText {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl From<Vec<u8>> for InputText {
    fn from(bytes: Vec<u8>) -> Self {
        InputText::Owned(bytes)
    }
}

/// Read the text stored at `path`.
///
/// The file is memory-mapped and used in place. With `strip_line_breaks`,
/// `\n` and `\r` are dropped into an owned copy so line-wrapped sequence
/// files index as one contiguous text.
pub fn load_text(path: &Path, strip_line_breaks: bool) -> Result<InputText> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    // Zero-length files cannot be mapped on every platform
    if len == 0 {
        return Ok(InputText::Owned(Vec::new()));
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;

    if strip_line_breaks && memchr::memchr2(b'\n', b'\r', &mmap).is_some() {
        return Ok(InputText::Owned(prepare_text(&mmap, true)));
    }
    Ok(InputText::Mapped(mmap))
}

/// Copy `raw`, optionally without line breaks
pub fn prepare_text(raw: &[u8], strip_line_breaks: bool) -> Vec<u8> {
    if !strip_line_breaks {
        return raw.to_vec();
    }

    let mut text = Vec::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(idx) = memchr::memchr2(b'\n', b'\r', rest) {
        text.extend_from_slice(&rest[..idx]);
        rest = &rest[idx + 1..];
    }
    text.extend_from_slice(rest);
    text
}
