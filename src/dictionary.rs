use crate::generator::BoardGenerator;
use crate::grid::Adjacency;
use crate::score::{normalize_word, score_words, word_score};
use crate::search::Search;
use crate::{Board, Error, WordTrie};

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Order for presenting words: longest first, then alphabetical.
fn by_length_then_alpha(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// All words found on a board, with the total score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Distinct words, longest first, words of equal length in alphabetical order.
    pub words: Vec<String>,
    /// Sum of [`word_score`] over `words`.
    pub total_score: u64,
}

impl Solution {
    fn from_words<I: IntoIterator<Item = String>>(words: I) -> Solution {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort_by(|a, b| by_length_then_alpha(a, b));
        let total_score = words.iter().map(|word| word_score(word.len())).sum();
        Solution { words, total_score }
    }

    /// Number of words found.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if `word` is one of the found words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Score of the submitted `words` that are part of this solution.
    /// Submitted words are lowercased and stripped of non-letters, like in [`score_words`].
    /// Words that are not on the board score nothing; duplicates count once.
    pub fn score_found<S: AsRef<str>>(&self, words: &[S]) -> u64 {
        let found: Vec<String> = words
            .iter()
            .map(|w| normalize_word(w.as_ref()))
            .filter(|w| self.contains(w))
            .collect();
        score_words(found)
    }
}

/// A dictionary with everything needed to solve boards.
///
/// The wordlist trie and the cell adjacency are built once, and are only read
/// when solving. A `Dictionary` can be shared between threads and used for any
/// number of boards.
///
/// ## Examples
/// ```
/// # use wordhunt_solver::{Board, Dictionary, Error};
/// let dictionary = Dictionary::from_words(&["cat", "cats"]);
/// let board = Board::from_rows(&["cats", "xxxx", "xxxx", "xxxx"])?;
/// let solution = dictionary.solve(&board);
/// assert_eq!(solution.words, vec!["cats", "cat"]);
/// assert_eq!(solution.total_score, 500);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    trie: WordTrie,
    adjacency: Adjacency,
    max_attempts: usize,
}

impl From<WordTrie> for Dictionary {
    fn from(trie: WordTrie) -> Self {
        Dictionary {
            trie,
            adjacency: Adjacency::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Dictionary {
    /// Create a dictionary by reading words from `wordfile`.
    ///
    /// The `wordfile` contains whitespace separated words. Only words of at
    /// least 3 ascii letters are used, other tokens are skipped.
    /// ## Errors
    /// If the `wordfile` can not be read.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_file("wordlists/words.txt")?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        Ok(Dictionary::from(WordTrie::from_file(wordfile)?))
    }

    /// Create a dictionary from a list of words.
    pub fn from_words(words: &[&str]) -> Dictionary {
        Dictionary::from(WordTrie::from_words(words))
    }

    #[cfg(all(feature = "bincode", feature = "serde"))]
    /// Create a dictionary from a bincoded wordlist, see [`WordTrie::deserialize_from`].
    /// ## Errors
    /// If the wordfile does not exist, or cannot be decoded.
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        Ok(Dictionary::from(WordTrie::deserialize_from(wordfile)?))
    }

    /// Set the number of boards [`generate_playable`](Dictionary::generate_playable)
    /// tries before giving up, and returns the modified dictionary.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Dictionary {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Return reference to our wordlist
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Return reference to the cell adjacency
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Find all words on `board`.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn solve(&self, board: &Board) -> Solution {
        let found = Search::new(board, &self.trie, &self.adjacency).run();
        let solution = Solution::from_words(found.into_iter().map(|(word, _)| word));
        debug!(
            "solved {}: {} words, score {}",
            board.letters(),
            solution.len(),
            solution.total_score
        );
        solution
    }

    /// Parse `board` and find all words.
    /// ## Errors
    /// If `board` is not a valid board, see [`Board`].
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "cats"]);
    /// assert!(dictionary.solve_str("cats xxxx xxxx xxx").is_err());
    /// ```
    pub fn solve_str(&self, board: &str) -> Result<Solution, Error> {
        let board: Board = board.parse()?;
        Ok(self.solve(&board))
    }

    /// Find all words on `board`, each with the cells of a path that spells it.
    /// The words are in the same order as in [`Solution::words`].
    pub fn solve_paths(&self, board: &Board) -> Vec<(String, Vec<usize>)> {
        let mut found: Vec<(String, Vec<usize>)> = Search::new(board, &self.trie, &self.adjacency)
            .run()
            .into_iter()
            .map(|(word, path)| (word, path.iter().map(|&cell| cell as usize).collect()))
            .collect();
        found.sort_by(|(a, _), (b, _)| by_length_then_alpha(a, b));
        found
    }

    /// Solve a list of boards in parallel.
    #[cfg(feature = "rayon")]
    pub fn solve_many(&self, boards: &[Board]) -> Vec<Solution> {
        boards.par_iter().map(|board| self.solve(board)).collect()
    }

    /// Solve a list of boards.
    #[cfg(not(feature = "rayon"))]
    pub fn solve_many(&self, boards: &[Board]) -> Vec<Solution> {
        boards.iter().map(|board| self.solve(board)).collect()
    }

    /// Generate a board whose total score is above `min_score`.
    ///
    /// Boards are drawn from a [`BoardGenerator`] seeded with `seed`, until one scores
    /// enough. The same seed gives the same board.
    /// ## Errors
    /// [`Error::NoPlayableBoard`] if no board scores enough within the maximum number of attempts.
    pub fn generate_playable(&self, seed: u64, min_score: u64) -> Result<(Board, Solution), Error> {
        let mut generator = BoardGenerator::new(seed);
        for attempt in 1..=self.max_attempts {
            let board = generator.next_board();
            let solution = self.solve(&board);
            if solution.total_score > min_score {
                debug!("board {} accepted after {} attempts", board.letters(), attempt);
                return Ok((board, solution));
            }
        }
        Err(Error::NoPlayableBoard {
            attempts: self.max_attempts,
            min_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_cats() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "cats"]);
        let board = Board::from_rows(&["cats", "xxxx", "xxxx", "xxxx"])?;
        let solution = dictionary.solve(&board);
        assert_eq!(solution.words, vec!["cats", "cat"]);
        assert_eq!(solution.total_score, 500);
        Ok(())
    }

    #[test]
    fn test_uniform_board() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "cats", "tree"]);
        let solution = dictionary.solve_str("eeeeeeeeeeeeeeee")?;
        assert!(solution.is_empty());
        assert_eq!(solution.total_score, 0);
        Ok(())
    }

    #[test]
    fn test_sorted() -> Result<()> {
        // s t a r
        // e a t s
        // x x x x
        // x x x x
        let dictionary = Dictionary::from_words(&["star", "rats", "tar", "tea", "eat", "sat", "seat", "stare"]);
        let solution = dictionary.solve_str("star eats xxxx xxxx")?;
        let lens: Vec<usize> = solution.words.iter().map(String::len).collect();
        let mut sorted = lens.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lens, sorted);
        for pair in solution.words.windows(2) {
            if pair[0].len() == pair[1].len() {
                assert!(pair[0] < pair[1]);
            }
        }
        assert!(solution.contains("star"));
        assert!(solution.contains("seat"));
        assert!(!solution.contains("stare"));
        Ok(())
    }

    #[test]
    fn test_duplicate_paths_count_once() -> Result<()> {
        // "tea" can be spelled along many paths
        let dictionary = Dictionary::from_words(&["tea"]);
        let solution = dictionary.solve_str("teat aete teat aete")?;
        assert_eq!(solution.words, vec!["tea"]);
        assert_eq!(solution.total_score, 100);
        Ok(())
    }

    #[test]
    fn test_solve_paths() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "cats"]);
        let board: Board = "cats xxxx xxxx xxxx".parse()?;
        let paths = dictionary.solve_paths(&board);
        assert_eq!(
            paths,
            vec![
                (String::from("cats"), vec![0, 1, 2, 3]),
                (String::from("cat"), vec![0, 1, 2])
            ]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_board() {
        let dictionary = Dictionary::from_words(&["cat"]);
        let err = dictionary.solve_str("catsxxxxxxxxxxx").unwrap_err();
        assert!(err.is_invalid_board());
        let err = dictionary.solve_str("cats1xxxxxxxxxxx").unwrap_err();
        assert!(err.is_invalid_board());
    }

    #[test]
    fn test_score_found() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "cats"]);
        let solution = dictionary.solve_str("cats xxxx xxxx xxxx")?;
        assert_eq!(solution.score_found(&["CAT", "cat", "dog", "cats"]), 500);
        assert_eq!(solution.score_found::<&str>(&[]), 0);
        assert_eq!(solution.score_found(&["Cat!"]), 100);
        assert_eq!(solution.score_found(&["c-a-t-s", "CATS"]), 400);
        Ok(())
    }

    #[test]
    fn test_solve_many() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "cats"]);
        let boards = vec![
            "cats xxxx xxxx xxxx".parse::<Board>()?,
            "xxxx xxxx xxxx xxxx".parse::<Board>()?,
        ];
        let solutions = dictionary.solve_many(&boards);
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].total_score, 500);
        assert!(solutions[1].is_empty());
        Ok(())
    }

    #[test]
    fn test_generate_playable() -> Result<()> {
        let dictionary = Dictionary::from_file("wordlists/words.txt")?;
        let (board, solution) = dictionary.generate_playable(3, 0)?;
        assert!(solution.total_score > 0);
        assert_eq!(dictionary.solve(&board), solution);
        let (again, _) = dictionary.generate_playable(3, 0)?;
        assert_eq!(board, again);
        Ok(())
    }

    #[cfg(all(feature = "bincode", feature = "serde"))]
    #[test]
    fn test_deserialize_from() -> Result<()> {
        use std::fs;

        let dir = std::env::temp_dir();
        let wordfile = dir.join(format!("wordhunt-{}.bin", std::process::id()));
        let wordfile = wordfile.to_str().unwrap();
        let trie = WordTrie::from_file("wordlists/words.txt")?;
        bincode::serialize_into(fs::File::create(wordfile).unwrap(), &trie).unwrap();

        let expect = Dictionary::from(trie);
        let dictionary = Dictionary::deserialize_from(wordfile)?;
        fs::remove_file(wordfile).unwrap();
        assert_eq!(dictionary.trie().word_count(), expect.trie().word_count());
        assert_eq!(dictionary.trie().wordfile(), wordfile);
        for seed in 0..10 {
            let board: Board = crate::generate_board(seed).parse()?;
            assert_eq!(dictionary.solve(&board), expect.solve(&board));
        }
        Ok(())
    }

    #[cfg(all(feature = "bincode", feature = "serde"))]
    #[test]
    fn test_deserialize_garbage() {
        let dir = std::env::temp_dir();
        let wordfile = dir.join(format!("wordhunt-garbage-{}.bin", std::process::id()));
        let wordfile = wordfile.to_str().unwrap();
        std::fs::write(wordfile, b"not a wordlist").unwrap();
        let err = Dictionary::deserialize_from(wordfile).unwrap_err();
        std::fs::remove_file(wordfile).unwrap();
        assert!(matches!(err, Error::WordfileDeserializeError(_)));
        assert!(matches!(
            Dictionary::deserialize_from("wordlists/missing.bin"),
            Err(Error::ReadError { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "NoPlayableBoard { attempts: 5, min_score: 1000 }")]
    fn test_no_playable_board() {
        let dictionary = Dictionary::from_words(&[]).with_max_attempts(5);
        dictionary.generate_playable(1, 1000).unwrap();
    }
}
