//! A word hunt library for Rust.
//! <br>
//! This crate finds all words on a 4x4 word hunt (or boggle) board.
//! A word is spelled by a path of touching cells (horizontally, vertically or diagonally),
//! where each cell is used at most once. Words have at least 3 letters, and are scored by their length.
//! It can also generate random boards from a seed, so puzzles can be shared and replayed.
//! With the `rayon` feature, many boards can be solved in parallel.
//!
//! # How to use `wordhunt_solver`
//! Start by creating a [`Dictionary`] from a wordlist, then solve any number of boards with it.
//! The wordlist must contain whitespace separated words.
//! Tokens that are not a word of 3 or more ascii letters are skipped.
//!
//! # Basic usage
//!  ```
//! # use wordhunt_solver::{Board, Dictionary, Error, generate_board, word_score};
//! let dictionary = Dictionary::from_words(&["rust", "rest", "sub"]);
//! let board: Board = "rust ebxx xxxx xxxx".parse()?;
//! let solution = dictionary.solve(&board);
//! assert_eq!(solution.words, vec!["rust", "sub"]);
//! assert_eq!(solution.total_score, word_score(4) + word_score(3));
//!
//! let board: Board = generate_board(2024).parse()?;
//! println!("{}", board);
//! for word in dictionary.solve(&board).words {
//!     println!("{} {}", word, word_score(word.len()));
//! }
//! # Ok::<(), Error>(())
//! ```
//!
//! # About implementation
//! The wordlist is stored as a compact trie. The solver walks from each cell depth first,
//! and stops as soon as the spelled letters are not the start of any word in the trie.
mod board;
mod dictionary;
mod error;
mod generator;
mod grid;
mod labelset;
mod score;
mod search;
mod wordlist;

pub use crate::board::Board;
pub use crate::dictionary::{Dictionary, Solution};
pub use crate::error::Error;
pub use crate::generator::{generate_board, normalize, BoardGenerator, ENGLISH_LETTER_FREQUENCIES};
pub use crate::grid::{Adjacency, N, NCELLS};
pub use crate::labelset::{label_of, Label, LetterSet};
pub use crate::score::{score_words, word_score, MIN_WORD_LEN};
pub use crate::wordlist::{accept_token, TrieBuilder, WordTrie, ROOT};
