//! Error types for puzzle construction and solver I/O.
//!
//! Nothing inside the search itself can fail; every variant here is
//! raised before a [`Solver`](crate::solver::Solver) exists or after it has
//! finished (writing results).

use std::io;
use std::path::PathBuf;

/// Validation failures while building a [`Puzzle`](crate::puzzle::Puzzle)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid puzzle: no sides given")]
    NoSides,

    #[error("invalid puzzle: side {index} is empty")]
    EmptySide { index: usize },

    #[error("invalid puzzle: '{letter}' on side \"{side}\" is not a letter A-Z")]
    InvalidLetter { letter: char, side: String },

    #[error("invalid puzzle: letter '{letter}' is repeated")]
    RepeatedLetter { letter: char },

    #[error("invalid puzzle: max words must be positive, got {max_words}")]
    InvalidMaxWords { max_words: usize },
}

/// Crate-level error covering puzzle loading, dictionary reading and
/// solution output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

impl Error {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let err = Error::from(PuzzleError::RepeatedLetter { letter: 'A' });
        assert_eq!(err.to_string(), "invalid puzzle: letter 'A' is repeated");

        let err = Error::io(
            "failed to open words file",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "failed to open words file: missing");
    }
}
