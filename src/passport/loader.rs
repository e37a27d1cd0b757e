//! Batch file loader
//!
//! The whole file is read into memory, line endings are normalised to
//! "\n", then the text is cut into raw record blocks at every blank line
//! ("\n\n"). Blocks keep their internal newlines.

use std::fs;
use std::path::PathBuf;

use super::errors::{PassportError, PassportResult};

const BLOCK_SEPARATOR: &str = "\n\n";

/// Reads a passport batch file from disk.
pub struct PassportLoader {
    path: PathBuf,
}

impl PassportLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the file and returns its raw record blocks in file order.
    pub fn load(&self) -> PassportResult<Vec<String>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| PassportError::io(&self.path, e))?;

        let content = normalize_line_endings(&content);
        Ok(split_blocks(&content).into_iter().map(str::to_owned).collect())
    }
}

/// Rewrites "\r\n" and lone "\r" line endings to "\n".
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits batch content into raw record blocks.
///
/// No trimming: an empty input yields a single empty block, and a
/// trailing newline stays attached to the last block.
pub fn split_blocks(content: &str) -> Vec<&str> {
    content.split(BLOCK_SEPARATOR).collect()
}
