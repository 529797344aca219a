//! Compact set of puzzle letters.
//!
//! Letters live in the fixed universe `A..=Z` and are stored as bits of a
//! `u32`. Lower-case input is normalised to upper case; anything outside
//! the universe is never a member.

use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

/// Number of letters in the universe
pub const ALPHABET_SIZE: usize = 26;

/// Index of a letter in the universe (`A` = 0), if it belongs to it.
pub fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Immutable set of letters. Every operation returns a new set.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Set of the distinct letters in `word`.
    pub fn from_word(word: &str) -> Self {
        word.chars().collect()
    }

    /// Set of the distinct letters across all `words`.
    pub fn from_words<'w>(words: impl IntoIterator<Item = &'w str>) -> Self {
        words
            .into_iter()
            .fold(Self::empty(), |set, word| set | Self::from_word(word))
    }

    /// Copy of this set with `letter` added. Letters outside `A..=Z` are ignored.
    pub fn with(self, letter: char) -> Self {
        match letter_index(letter) {
            Some(i) => Self {
                bits: self.bits | (1 << i),
            },
            None => self,
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        letter_index(letter).is_some_and(|i| self.bits & (1 << i) != 0)
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Letters in `self` that are not in `other`
    pub fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.intersection(*other) == *other
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0..ALPHABET_SIZE)
            .filter(move |i| self.bits & (1 << i) != 0)
            .map(|i| (b'A' + i as u8) as char)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), LetterSet::with)
    }
}

impl BitOr for LetterSet {
    type Output = LetterSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd for LetterSet {
    type Output = LetterSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl Sub for LetterSet {
    type Output = LetterSet;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
