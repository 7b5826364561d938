use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// A board needs exactly 16 letters
    #[error("Invalid board: {0} letters, expect 16")]
    InvalidBoardLength(usize),

    /// A board given as rows needs 4 rows
    #[error("Invalid number of rows {0} (expect 4)")]
    InvalidRowCount(usize),

    /// A board given as cells needs 16 cells
    #[error("Invalid number of cells {0} (expect 16)")]
    InvalidCellCount(usize),

    /// Board content that is not a single letter
    #[error("Invalid board cell \"{0}\"")]
    InvalidCell(String),

    /// Letter weights must be finite, non negative, and not all zero
    #[error("Invalid letter weights for board generator")]
    InvalidWeights,

    /// No generated board reached the requested score
    #[error("No board with score above {min_score} in {attempts} attempts")]
    NoPlayableBoard { attempts: usize, min_score: u64 },
}

impl Error {
    /// Returns true if the error was caused by malformed board input.
    pub fn is_invalid_board(&self) -> bool {
        matches!(
            self,
            Error::InvalidBoardLength(_)
                | Error::InvalidRowCount(_)
                | Error::InvalidCellCount(_)
                | Error::InvalidCell(_)
        )
    }
}
