//! Weighted letter table used to populate new boards.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{BoggleError, Result};

/// Classic letter pool: each occurrence of a letter adds one unit of weight.
/// Vowels and common consonants are overrepresented. There is no `Q`.
pub const CLASSIC_POOL: &str = concat!(
    "EEEEEEEAAAAAAOOOOOIIIIUUU",
    "RRRRSSSSTTTTLLLLNNN",
    "BBCCDDFFGGHHKKMMPPYY",
    "JVWXZ",
);

/// Letters paired with relative draw weights.
#[derive(Debug, Clone)]
pub struct LetterWeights {
    letters: Vec<char>,
    index: WeightedIndex<u32>,
}

impl LetterWeights {
    /// Build a table from explicit `(letter, weight)` pairs.
    ///
    /// Letters are uppercased. Zero weights are allowed, but at least one
    /// letter must have a positive weight.
    pub fn new(table: &[(char, u32)]) -> Result<Self> {
        let mut letters = Vec::with_capacity(table.len());
        let mut weights = Vec::with_capacity(table.len());
        for &(letter, weight) in table {
            letters.push(normalize_letter(letter)?);
            weights.push(weight);
        }
        let index = WeightedIndex::new(&weights).map_err(|_| BoggleError::EmptyLetterTable)?;
        Ok(Self { letters, index })
    }

    /// Build a table where each letter's weight is its number of occurrences in
    /// `pool`. Whitespace in the pool is ignored.
    pub fn from_pool(pool: &str) -> Result<Self> {
        let mut counts = [0u32; 26];
        for c in pool.chars().filter(|c| !c.is_whitespace()) {
            let letter = normalize_letter(c)?;
            counts[(letter as u8 - b'A') as usize] += 1;
        }
        let table: Vec<(char, u32)> = counts
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(i, &n)| ((b'A' + i as u8) as char, n))
            .collect();
        Self::new(&table)
    }

    /// The default Boggle distribution, built from [`CLASSIC_POOL`].
    pub fn classic() -> Self {
        Self::from_pool(CLASSIC_POOL).expect("classic pool holds only A-Z letters")
    }

    /// Draw one letter.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.letters[self.index.sample(rng)]
    }

    /// Letters that can be drawn, including any with zero weight.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Default for LetterWeights {
    fn default() -> Self {
        Self::classic()
    }
}

/// Uppercase `c` and check it is a letter A-Z.
pub(crate) fn normalize_letter(c: char) -> Result<char> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Ok(upper)
    } else {
        Err(BoggleError::InvalidLetter(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classic_table_has_no_q() {
        let weights = LetterWeights::classic();
        assert_eq!(weights.letters().len(), 25);
        assert!(!weights.letters().contains(&'Q'));
        assert!(weights.letters().contains(&'Z'));
    }

    #[test]
    fn test_single_letter_table() {
        let weights = LetterWeights::new(&[('q', 1), ('Z', 0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(weights.sample(&mut rng), 'Q');
        }
    }

    #[test]
    fn test_empty_tables_rejected() {
        assert!(matches!(
            LetterWeights::new(&[]),
            Err(BoggleError::EmptyLetterTable)
        ));
        assert!(matches!(
            LetterWeights::new(&[('A', 0)]),
            Err(BoggleError::EmptyLetterTable)
        ));
        assert!(matches!(
            LetterWeights::from_pool("  "),
            Err(BoggleError::EmptyLetterTable)
        ));
    }

    #[test]
    fn test_pool_rejects_non_letters() {
        assert!(matches!(
            LetterWeights::from_pool("AB3"),
            Err(BoggleError::InvalidLetter('3'))
        ));
    }

    #[test]
    fn test_pool_weights_follow_counts() {
        let weights = LetterWeights::from_pool("aaab").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let draws = 4000;
        let a_count = (0..draws)
            .filter(|_| weights.sample(&mut rng) == 'A')
            .count();
        // expected 3000
        assert!(a_count > 2700 && a_count < 3300, "got {}", a_count);
    }
}
