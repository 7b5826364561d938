use crate::grid::{N, NCELLS};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

type Inner = [u8; NCELLS];

/// A 4x4 word hunt board: 16 lowercase ascii letters in row-major order.
///
/// A board can be parsed from
/// - a string of 16 letters ([`FromStr`]),
/// - 4 rows ([`from_rows`](Board::from_rows)),
/// - 16 single-letter cells ([`from_cells`](Board::from_cells)).
///
/// Parsing is case insensitive. Whitespace and ascii punctuation are allowed as
/// separators and ignored; any other character makes the board invalid.
/// ## Examples
/// ```
/// # use wordhunt_solver::{Board, Error};
/// let board: Board = "CATS xxxx xxxx xxxx".parse()?;
/// assert_eq!(board.letters(), "catsxxxxxxxxxxxx");
/// assert_eq!(board, Board::from_rows(&["cats", "xxxx", "xxxx", "xxxx"])?);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board(Inner);

impl Deref for Board {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Display the board as 4 lines of 4 letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = (0..N)
            .map(|i| String::from_utf8_lossy(self.row(i)).into_owned())
            .collect::<Vec<String>>();
        write!(f, "{}", rows.join("\n"))
    }
}

/// Append the letters of `s` to `letters`, lowercased.
fn push_letters(s: &str, letters: &mut Vec<u8>) -> Result<(), Error> {
    for ch in s.chars() {
        if ch.is_whitespace() || ch.is_ascii_punctuation() {
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            return Err(Error::InvalidCell(ch.to_string()));
        }
        letters.push(ch.to_ascii_lowercase() as u8);
    }
    Ok(())
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = Vec::with_capacity(NCELLS);
        push_letters(s, &mut letters)?;
        Board::from_slice(&letters)
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Board {
    /// Wrap letters that are already known to be lowercase ascii.
    pub(crate) fn from_raw(letters: Inner) -> Board {
        debug_assert!(letters.iter().all(u8::is_ascii_lowercase));
        Board(letters)
    }

    fn from_slice(letters: &[u8]) -> Result<Board, Error> {
        let inner = <Inner>::try_from(letters).map_err(|_| Error::InvalidBoardLength(letters.len()))?;
        Ok(Board(inner))
    }

    /// Create a `Board` from 4 rows.
    /// The rows may have separators, but must have 16 letters in total.
    /// ## Errors
    /// If there are not 4 rows, a row has an invalid character,
    /// or the number of letters is not 16.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut letters = Vec::with_capacity(NCELLS);
        for row in rows {
            push_letters(row.as_ref(), &mut letters)?;
        }
        Board::from_slice(&letters)
    }

    /// Create a `Board` from 16 cells, each consisting of a single letter.
    /// ## Errors
    /// If there are not 16 cells, or a cell is not a single letter.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::Board;
    /// let cells = ["a"; 15];
    /// assert!(Board::from_cells(&cells).is_err());
    /// ```
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Board, Error> {
        if cells.len() != NCELLS {
            return Err(Error::InvalidCellCount(cells.len()));
        }
        let mut letters = [0u8; NCELLS];
        for (letter, cell) in letters.iter_mut().zip(cells) {
            let cell = cell.as_ref();
            let mut chars = cell.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_alphabetic() => {
                    *letter = ch.to_ascii_lowercase() as u8;
                }
                _ => return Err(Error::InvalidCell(String::from(cell))),
            }
        }
        Ok(Board(letters))
    }

    /// Create a `Board` from 16 ascii letter bytes.
    /// ## Errors
    /// If one of the bytes is not an ascii letter.
    pub fn from_letters(letters: [u8; NCELLS]) -> Result<Board, Error> {
        let mut inner = letters;
        for b in inner.iter_mut() {
            if !b.is_ascii_alphabetic() {
                return Err(Error::InvalidCell(String::from_utf8_lossy(&[*b]).into_owned()));
            }
            b.make_ascii_lowercase();
        }
        Ok(Board(inner))
    }

    /// Row `i` of the board.
    pub fn row(&self, i: usize) -> &[u8] {
        &self.0[i * N..(i + 1) * N]
    }

    /// Get the board as a vec of 4 strings
    pub fn to_strings(&self) -> Vec<String> {
        (0..N)
            .map(|i| String::from_utf8_lossy(self.row(i)).into_owned())
            .collect()
    }

    /// The 16 letters as one string.
    pub fn letters(&self) -> String {
        self.0.iter().map(|&b| b as char).collect()
    }

    /// Spell the letters on `path`, a list of cell indices.
    pub fn spell(&self, path: &[usize]) -> String {
        path.iter().map(|&cell| self.0[cell] as char).collect()
    }
}
