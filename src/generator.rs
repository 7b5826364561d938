use crate::board::Board;
use crate::grid::NCELLS;
use crate::labelset::NLETTERS;
use crate::Error;
use rand::distributions::{Distribution, WeightedIndex};
use rand::{rngs::StdRng, SeedableRng};

/// Approximate frequency (in percent) of the letters `a..=z` in english text.
/// The values do not add up to exactly 100; they are normalized before use.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; NLETTERS] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51,
    1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

/// Scale `weights` to probabilities that sum to 1.
/// ## Errors
/// If a weight is negative or not finite, or all weights are zero.
pub fn normalize(weights: &[f64; NLETTERS]) -> Result<[f64; NLETTERS], Error> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(Error::InvalidWeights);
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidWeights);
    }
    let mut probabilities = [0.0; NLETTERS];
    for (p, w) in probabilities.iter_mut().zip(weights) {
        *p = w / total;
    }
    Ok(probabilities)
}

/// Draws random boards from a seeded random number generator.
///
/// Every cell is drawn independently from the same letter distribution.
/// Two generators created with the same seed and weights produce the same boards.
/// ## Examples
/// ```
/// # use wordhunt_solver::BoardGenerator;
/// let mut a = BoardGenerator::new(42);
/// let mut b = BoardGenerator::new(42);
/// assert_eq!(a.next_board(), b.next_board());
/// ```
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    rng: StdRng,
    distribution: WeightedIndex<f64>,
}

impl BoardGenerator {
    /// Create a generator with english letter frequencies.
    pub fn new(seed: u64) -> BoardGenerator {
        Self::with_weights(seed, &ENGLISH_LETTER_FREQUENCIES)
            .expect("builtin letter frequencies are valid")
    }

    /// Create a generator with custom letter weights for `a..=z`.
    /// ## Errors
    /// If the weights can not be normalized, see [`normalize`].
    pub fn with_weights(seed: u64, weights: &[f64; NLETTERS]) -> Result<BoardGenerator, Error> {
        let probabilities = normalize(weights)?;
        let distribution =
            WeightedIndex::new(&probabilities[..]).map_err(|_| Error::InvalidWeights)?;
        Ok(BoardGenerator {
            rng: StdRng::seed_from_u64(seed),
            distribution,
        })
    }

    /// Draw the next board.
    pub fn next_board(&mut self) -> Board {
        let mut letters = [b'a'; NCELLS];
        for letter in letters.iter_mut() {
            *letter = b'a' + self.distribution.sample(&mut self.rng) as u8;
        }
        Board::from_raw(letters)
    }
}

impl Iterator for BoardGenerator {
    type Item = Board;
    fn next(&mut self) -> Option<Board> {
        Some(self.next_board())
    }
}

/// Generate a random board from `seed`, as a string of 16 lowercase letters.
/// ## Examples
/// ```
/// # use wordhunt_solver::generate_board;
/// let board = generate_board(7);
/// assert_eq!(board.len(), 16);
/// assert_eq!(board, generate_board(7));
/// ```
pub fn generate_board(seed: u64) -> String {
    BoardGenerator::new(seed).next_board().letters()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() -> Result<(), Error> {
        let p = normalize(&ENGLISH_LETTER_FREQUENCIES)?;
        let total: f64 = p.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(p[4] > p[0]); // e is more frequent than a
        Ok(())
    }

    #[test]
    fn test_invalid_weights() {
        let mut weights = [1.0; NLETTERS];
        weights[3] = -1.0;
        assert!(matches!(normalize(&weights), Err(Error::InvalidWeights)));
        weights[3] = f64::NAN;
        assert!(normalize(&weights).is_err());
        assert!(BoardGenerator::with_weights(1, &[0.0; NLETTERS]).is_err());
    }

    #[test]
    fn test_deterministic() {
        for seed in 0..200 {
            let a = generate_board(seed);
            let b = generate_board(seed);
            assert_eq!(a, b);
            assert_eq!(a.len(), 16);
            assert!(a.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_seeds_differ() {
        let boards: std::collections::HashSet<String> = (0..50).map(generate_board).collect();
        assert!(boards.len() > 45);
    }

    #[test]
    fn test_single_letter_weights() {
        let mut weights = [0.0; NLETTERS];
        weights[(b'q' - b'a') as usize] = 3.0;
        let mut generator = BoardGenerator::with_weights(9, &weights).unwrap();
        assert_eq!(generator.next_board().letters(), "qqqqqqqqqqqqqqqq");
    }

    #[test]
    fn test_stream() {
        let boards: Vec<Board> = BoardGenerator::new(5).take(3).collect();
        let again: Vec<Board> = BoardGenerator::new(5).take(3).collect();
        assert_eq!(boards, again);
        assert_eq!(boards[0].letters(), generate_board(5));
    }
}
