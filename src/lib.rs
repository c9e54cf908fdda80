//! # Boggle Engine
//!
//! A word-search engine for Boggle-style letter grids.
//!
//! A [`WordList`] answers whether a word is legal, a [`Board`] answers whether a
//! word can be traced through adjacent cells without reusing any cell. [`Game`]
//! combines the two into a single verdict per word.

pub mod board;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod letters;

pub use board::Board;
pub use dictionary::WordList;
pub use error::{BoggleError, Result};
pub use game::{Game, PlayOutcome, WordCheck};
pub use letters::LetterWeights;

/// Board size used when none is requested
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Largest supported board size; the search keeps visited cells in a 128-bit set
pub const MAX_BOARD_SIZE: usize = 10;

/// Load the word list from the embedded file
pub fn load_dictionary() -> WordList {
    WordList::parse(include_str!("../dictionary/words.txt"))
}
