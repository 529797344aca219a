//! Puzzle definition and the letter rules words must follow.
//!
//! A [`PuzzleDefinition`] is the JSON shape (`{"maxWords": 3, "sides": [...]}`);
//! a [`Puzzle`] is the validated form the solver works with. Decoding a
//! `Puzzle` directly from JSON runs the same validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, PuzzleError};
use crate::letter_set::{letter_index, LetterSet, ALPHABET_SIZE};

/// Words shorter than this are never allowed
pub const MIN_WORD_LEN: usize = 3;

/// Raw puzzle definition, as stored in puzzle files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDefinition {
    pub max_words: usize,
    pub sides: Vec<String>,
}

/// A validated puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleDefinition", into = "PuzzleDefinition")]
pub struct Puzzle {
    sides: Vec<String>,
    max_words: usize,
    letters: LetterSet,
    /// For each letter, the letters that may not follow it (its own side)
    exclusions: [LetterSet; ALPHABET_SIZE],
}

impl Puzzle {
    /// Build a puzzle from literal sides, e.g. `["ABC", "DEF", "GHI", "JKL"]`.
    pub fn new<S: AsRef<str>>(sides: &[S], max_words: usize) -> Result<Self, PuzzleError> {
        if sides.is_empty() {
            return Err(PuzzleError::NoSides);
        }
        if max_words == 0 {
            return Err(PuzzleError::InvalidMaxWords { max_words });
        }

        let mut letters = LetterSet::empty();
        let mut exclusions = [LetterSet::empty(); ALPHABET_SIZE];
        let mut normalized = Vec::with_capacity(sides.len());

        for (index, side) in sides.iter().enumerate() {
            let side = side.as_ref().trim().to_ascii_uppercase();
            if side.is_empty() {
                return Err(PuzzleError::EmptySide { index });
            }

            let mut side_letters = LetterSet::empty();
            for letter in side.chars() {
                if letter_index(letter).is_none() {
                    return Err(PuzzleError::InvalidLetter {
                        letter,
                        side: side.clone(),
                    });
                }
                if letters.contains(letter) {
                    return Err(PuzzleError::RepeatedLetter { letter });
                }
                letters = letters.with(letter);
                side_letters = side_letters.with(letter);
            }

            for letter in side_letters.iter() {
                if let Some(i) = letter_index(letter) {
                    exclusions[i] = side_letters;
                }
            }
            normalized.push(side);
        }

        Ok(Self {
            sides: normalized,
            max_words,
            letters,
            exclusions,
        })
    }

    pub fn from_definition(definition: &PuzzleDefinition) -> Result<Self, PuzzleError> {
        Self::new(&definition.sides, definition.max_words)
    }

    /// Decode and validate a puzzle from JSON text
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let definition: PuzzleDefinition = serde_json::from_str(json)?;
        Ok(Self::from_definition(&definition)?)
    }

    pub fn sides(&self) -> &[String] {
        &self.sides
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Every letter in the puzzle
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Letters that may not directly follow `letter`
    pub fn exclusion(&self, letter: char) -> LetterSet {
        match letter_index(letter) {
            Some(i) => self.exclusions[i],
            None => LetterSet::empty(),
        }
    }

    /// Check a dictionary word against the puzzle rules: at least
    /// [`MIN_WORD_LEN`] letters, only puzzle letters, and no two consecutive
    /// letters from the same side.
    pub fn is_word_allowed(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LEN {
            return false;
        }

        let mut disallowed = LetterSet::empty();
        for letter in word.chars() {
            let letter = letter.to_ascii_uppercase();
            if !self.letters.contains(letter) || disallowed.contains(letter) {
                return false;
            }
            disallowed = self.exclusion(letter);
        }

        true
    }

    /// True when `letters` covers every puzzle letter
    pub fn do_letters_solve(&self, letters: LetterSet) -> bool {
        letters.intersection(self.letters) == self.letters
    }
}

impl TryFrom<PuzzleDefinition> for Puzzle {
    type Error = PuzzleError;

    fn try_from(definition: PuzzleDefinition) -> Result<Self, Self::Error> {
        Self::from_definition(&definition)
    }
}

impl From<Puzzle> for PuzzleDefinition {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            max_words: puzzle.max_words,
            sides: puzzle.sides,
        }
    }
}
