//! Solver library for letter-boxed word puzzles.
//!
//! A puzzle is a set of sides, each a group of letters. A solution is a
//! chain of dictionary words where each word starts with the previous
//! word's last letter, no word places two letters from the same side next
//! to each other, and together the words use every letter in the puzzle.
//!
//! The search is heuristic and bounded: fan-out is capped per node and the
//! caller decides how long to keep stepping the [`Solver`].

pub mod error;
pub mod explorer;
pub mod letter_set;
pub mod log;
pub mod puzzle;
pub mod report;
pub mod scoring;
pub mod solution;
pub mod solver;
pub mod word;
pub mod word_source;

// Re-export main types
pub use error::{Error, PuzzleError};
pub use explorer::{ExploreStats, Explorer};
pub use letter_set::LetterSet;
pub use puzzle::{Puzzle, PuzzleDefinition};
pub use scoring::{Scoring, ScoringStrategy, WeightedScoring};
pub use solution::{Solution, SolutionHasher, SolutionsByWordCount};
pub use solver::{SolveReport, SolveStatus, Solver, SolverConfig, SolverState};
pub use word::{WordInfo, WordMapping};
pub use word_source::{load_words, WordSource};
