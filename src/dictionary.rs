//! The legal word list.
//!
//! Words are stored uppercase; every lookup is uppercased first, so membership is
//! case-insensitive to callers.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::error::{BoggleError, Result};

/// An immutable set of legal words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Read a newline-separated word file from disk.
    ///
    /// Any I/O failure is fatal: no partial list is returned.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unreadable = |source| BoggleError::DictionarySourceUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        let list = Self::from_reader(BufReader::new(file)).map_err(unreadable)?;
        debug!(words = list.len(), "loaded dictionary");
        Ok(list)
    }

    /// Build a list from any line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line?) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Build a list from in-memory text, one word per line.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.lines().filter_map(normalize).collect(),
        }
    }

    /// Is `word` a legal word? Case-insensitive; the empty string never is.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let found = self.words.contains(&word.to_uppercase());
        trace!(word, found, "dictionary lookup");
        found
    }

    /// Point value of a word: one point per letter.
    pub fn score(word: &str) -> usize {
        word.chars().count()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, uppercase, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_uppercase())
    }
}
