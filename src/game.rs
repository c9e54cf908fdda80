//! One round of play: a board, the shared word list, and the words scored so far.

use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::board::Board;
use crate::dictionary::WordList;
use crate::error::Result;

/// Verdict for a single submitted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCheck {
    /// Legal word and traceable on the board
    Ok,
    /// Legal word, but no path spells it
    NotOnBoard,
    /// Not in the word list
    NotWord,
}

impl WordCheck {
    pub fn as_str(self) -> &'static str {
        match self {
            WordCheck::Ok => "ok",
            WordCheck::NotOnBoard => "not-on-board",
            WordCheck::NotWord => "not-word",
        }
    }

    pub fn is_ok(self) -> bool {
        self == WordCheck::Ok
    }
}

impl std::fmt::Display for WordCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`Game::play_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Accepted { points: usize, total: usize },
    AlreadyPlayed,
    Rejected(WordCheck),
}

/// A board paired with a shared word list and the round's score.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    words: Arc<WordList>,
    played: Vec<String>,
    score: usize,
}

impl Game {
    pub fn new(board: Board, words: Arc<WordList>) -> Self {
        Self {
            board,
            words,
            played: Vec::new(),
            score: 0,
        }
    }

    /// Start a game on a fresh random board.
    pub fn start<R: Rng + ?Sized>(size: usize, words: Arc<WordList>, rng: &mut R) -> Result<Self> {
        Ok(Self::new(Board::create(size, rng)?, words))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Accepted words, in the order they were played.
    pub fn played_words(&self) -> &[String] {
        &self.played
    }

    /// Classify `word`. The dictionary is consulted before the board.
    pub fn check_word(&self, word: &str) -> WordCheck {
        if !self.words.contains(word) {
            WordCheck::NotWord
        } else if !self.board.has_path(word) {
            WordCheck::NotOnBoard
        } else {
            WordCheck::Ok
        }
    }

    /// Classify many words at once on the rayon pool, preserving input order.
    pub fn check_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<WordCheck> {
        words
            .par_iter()
            .map(|word| self.check_word(word.as_ref()))
            .collect()
    }

    /// Check `word` and, if it is good and new, add its points to the score.
    pub fn play_word(&mut self, word: &str) -> PlayOutcome {
        let check = self.check_word(word);
        if !check.is_ok() {
            debug!(word, %check, "word rejected");
            return PlayOutcome::Rejected(check);
        }

        let word = word.to_uppercase();
        if self.played.contains(&word) {
            return PlayOutcome::AlreadyPlayed;
        }

        let points = WordList::score(&word);
        self.score += points;
        debug!(word = %word, points, total = self.score, "word accepted");
        self.played.push(word);

        PlayOutcome::Accepted {
            points,
            total: self.score,
        }
    }

    /// Replace the board with a fresh random one and clear the round's score.
    pub fn new_board<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.board = Board::create(self.board.size(), rng)?;
        self.played.clear();
        self.score = 0;
        Ok(())
    }
}
