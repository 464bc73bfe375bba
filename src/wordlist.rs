//! Loading newline-separated word lists.
//!
//! One word per line. Surrounding whitespace is trimmed, and blank lines or
//! lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::trie::Trie;

impl Trie {
    /// Insert every word read from `reader`.
    ///
    /// Returns how many words were new to the trie.
    pub fn load_words<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut inserted = 0;
        let mut lines = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Read {
                line: idx + 1,
                source,
            })?;
            lines += 1;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if self.insert(word) {
                inserted += 1;
            }
        }
        debug!(lines, inserted, len = self.len(), "loaded word list");
        Ok(inserted)
    }

    /// Insert every word of the file at `path`.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading word list");
        self.load_words(BufReader::new(file))
    }

    /// Build a trie from the word list at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut trie = Trie::new();
        trie.load_path(path)?;
        Ok(trie)
    }
}
