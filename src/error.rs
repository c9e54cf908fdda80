//! Errors raised while building word lists, letter tables and boards.
//!
//! Queries never fail; only construction and cell access return these.

use std::path::PathBuf;

use thiserror::Error;

/// Shorthand for results carrying a [`BoggleError`].
pub type Result<T> = std::result::Result<T, BoggleError>;

#[derive(Error, Debug)]
pub enum BoggleError {
    /// The word source could not be opened or read.
    #[error("cannot read dictionary at {}: {source}", .path.display())]
    DictionarySourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Board size of zero or above the supported maximum.
    #[error("invalid grid size {size}: must be between 1 and {max}")]
    InvalidGridSize { size: usize, max: usize },

    /// Caller asked for a cell outside the board.
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// A cell was given something other than a letter A-Z.
    #[error("invalid letter {0:?}: cells hold a single letter A-Z")]
    InvalidLetter(char),

    /// A row whose length differs from the board size.
    #[error("row {row} has {len} letters, expected {size}")]
    RaggedRows { row: usize, len: usize, size: usize },

    #[error("letter table has no positive weights")]
    EmptyLetterTable,
}
