//! The letter grid and word-path search.
//!
//! A word is on the board if it can be spelled by a path of cells where each
//! cell touches the previous one horizontally, vertically or diagonally, and no
//! cell is used twice in the same path.
//!
//! Each branch of the search carries its own `Visited` value. Extending it
//! produces a new value, so a cell tried on an abandoned branch stays available
//! to its siblings and to later start points.

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{BoggleError, Result};
use crate::letters::{normalize_letter, LetterWeights};
use crate::MAX_BOARD_SIZE;

/// A `(row, col)` coordinate on the board.
pub type Cell = (usize, usize);

/// The Moore neighborhood: every `(dr, dc)` step except staying put.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells already used by the path under exploration, one bit per cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Visited(u128);

impl Visited {
    fn contains(self, index: usize) -> bool {
        self.0 & (1u128 << index) != 0
    }

    /// A new set holding everything in `self` plus `index`.
    #[must_use]
    fn with(self, index: usize) -> Self {
        Self(self.0 | (1u128 << index))
    }
}

/// A square grid of uppercase letters, indexed `[row][col]`.
///
/// Each row is its own `Vec`, so cloning a board or overwriting one row never
/// affects another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<char>>,
}

impl Board {
    /// Create a `size`x`size` board filled from the classic letter distribution.
    pub fn create<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        Self::with_weights(size, &LetterWeights::classic(), rng)
    }

    /// Create a board drawing every cell independently from `weights`.
    pub fn with_weights<R: Rng + ?Sized>(
        size: usize,
        weights: &LetterWeights,
        rng: &mut R,
    ) -> Result<Self> {
        check_size(size)?;
        let cells = (0..size)
            .map(|_| (0..size).map(|_| weights.sample(rng)).collect::<Vec<char>>())
            .collect();
        debug!(size, "created board");
        Ok(Self { size, cells })
    }

    /// Build a board from explicit rows, e.g. `["CXX", "ATX", "DOG"]`.
    ///
    /// The number of rows sets the size; every row must have that many letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, letters)| parse_row(row, letters.as_ref(), size))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { size, cells })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<char> {
        self.check_cell(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite one cell. Lowercase letters are stored uppercase.
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> Result<()> {
        self.check_cell(row, col)?;
        self.cells[row][col] = normalize_letter(letter)?;
        Ok(())
    }

    /// The letters of one row, left to right.
    pub fn row(&self, row: usize) -> Result<&[char]> {
        self.check_cell(row, 0)?;
        Ok(&self.cells[row])
    }

    /// Replace a whole row with the letters of `letters`.
    pub fn set_row(&mut self, row: usize, letters: &str) -> Result<()> {
        self.check_cell(row, 0)?;
        self.cells[row] = parse_row(row, letters, self.size)?;
        Ok(())
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Can `word` be traced on the board? Case-insensitive; the empty string
    /// and words with letters outside A-Z are never found.
    pub fn has_path(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }

    /// Same answer as [`Board::has_path`], with start points searched on the
    /// rayon pool. Each start point gets its own visited set.
    pub fn has_path_parallel(&self, word: &str) -> bool {
        let Some(letters) = self.prepare(word) else {
            return false;
        };
        let found = (0..self.size * self.size).into_par_iter().any(|start| {
            let (row, col) = (start / self.size, start % self.size);
            let mut path = Vec::with_capacity(letters.len());
            self.walk(
                &letters,
                row as isize,
                col as isize,
                Visited::default(),
                &mut path,
            )
        });
        trace!(word, found, "parallel path query");
        found
    }

    /// The first path spelling `word`, trying start points in row-major order.
    pub fn find_path(&self, word: &str) -> Option<Vec<Cell>> {
        let letters = self.prepare(word)?;
        let mut path = Vec::with_capacity(letters.len());

        for row in 0..self.size {
            for col in 0..self.size {
                if self.walk(
                    &letters,
                    row as isize,
                    col as isize,
                    Visited::default(),
                    &mut path,
                ) {
                    trace!(word, ?path, "path found");
                    return Some(path);
                }
            }
        }

        trace!(word, "no path");
        None
    }

    /// Uppercase `word` and reject anything no path could spell.
    ///
    /// Only ASCII letters are accepted, so characters like `ß` never widen
    /// into letters that are on the board.
    fn prepare(&self, word: &str) -> Option<Vec<char>> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() > self.size * self.size {
            return None;
        }
        Some(letters)
    }

    /// Depth-first search for `word` starting at `(row, col)`.
    ///
    /// On success `path` holds the cells used, in order. On failure it is left
    /// as it was on entry.
    fn walk(
        &self,
        word: &[char],
        row: isize,
        col: isize,
        visited: Visited,
        path: &mut Vec<Cell>,
    ) -> bool {
        let n = self.size as isize;
        if row < 0 || row >= n || col < 0 || col >= n {
            return false;
        }
        let (r, c) = (row as usize, col as usize);

        if self.cells[r][c] != word[0] {
            return false;
        }

        let index = r * self.size + c;
        if visited.contains(index) {
            return false;
        }

        path.push((r, c));
        if word.len() == 1 {
            return true;
        }

        let visited = visited.with(index);
        let rest = &word[1..];
        for (dr, dc) in NEIGHBORS {
            if self.walk(rest, row + dr, col + dc, visited, path) {
                return true;
            }
        }

        path.pop();
        false
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(BoggleError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(BoggleError::InvalidGridSize {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

fn parse_row(row: usize, letters: &str, size: usize) -> Result<Vec<char>> {
    let cells = letters
        .chars()
        .map(normalize_letter)
        .collect::<Result<Vec<_>>>()?;
    if cells.len() != size {
        return Err(BoggleError::RaggedRows {
            row,
            len: cells.len(),
            size,
        });
    }
    Ok(cells)
}
