//! Dictionary words and the letter-adjacency index over them.

use crate::letter_set::{letter_index, LetterSet, ALPHABET_SIZE};

/// Facts derived once per accepted dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    word: String,
    first_letter: char,
    last_letter: char,
    letters: LetterSet,
}

impl WordInfo {
    /// Returns `None` for an empty word.
    pub fn new(word: impl Into<String>) -> Option<Self> {
        let word = word.into().to_ascii_uppercase();
        let first_letter = word.chars().next()?;
        let last_letter = word.chars().next_back()?;
        let letters = LetterSet::from_word(&word);

        Some(Self {
            word,
            first_letter,
            last_letter,
            letters,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn first_letter(&self) -> char {
        self.first_letter
    }

    pub fn last_letter(&self) -> char {
        self.last_letter
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }
}

/// Index from a letter to the words starting or ending with it.
///
/// The mapping owns the word pool. Lookups hand back fresh vectors of
/// references so callers can sort and truncate them without touching the
/// index.
#[derive(Debug, Clone, Default)]
pub struct WordMapping {
    words: Vec<WordInfo>,
    by_first_letter: [Vec<usize>; ALPHABET_SIZE],
    by_last_letter: [Vec<usize>; ALPHABET_SIZE],
}

impl WordMapping {
    pub fn new(words: Vec<WordInfo>) -> Self {
        let mut by_first_letter: [Vec<usize>; ALPHABET_SIZE] = Default::default();
        let mut by_last_letter: [Vec<usize>; ALPHABET_SIZE] = Default::default();

        for (position, info) in words.iter().enumerate() {
            if let Some(i) = letter_index(info.first_letter) {
                by_first_letter[i].push(position);
            }
            if let Some(i) = letter_index(info.last_letter) {
                by_last_letter[i].push(position);
            }
        }

        Self {
            words,
            by_first_letter,
            by_last_letter,
        }
    }

    /// The whole pool, in insertion order
    pub fn words(&self) -> &[WordInfo] {
        &self.words
    }

    pub fn get(&self, position: usize) -> Option<&WordInfo> {
        self.words.get(position)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words_with_first_letter(&self, letter: char) -> Vec<&WordInfo> {
        self.lookup(&self.by_first_letter, letter)
    }

    pub fn words_with_last_letter(&self, letter: char) -> Vec<&WordInfo> {
        self.lookup(&self.by_last_letter, letter)
    }

    fn lookup(&self, index: &[Vec<usize>; ALPHABET_SIZE], letter: char) -> Vec<&WordInfo> {
        match letter_index(letter) {
            Some(i) => index[i].iter().map(|&position| &self.words[position]).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(word: &str) -> WordInfo {
        WordInfo::new(word).unwrap()
    }

    #[test]
    fn test_word_info() {
        let word = info("dick");
        assert_eq!(word.word(), "DICK");
        assert_eq!(word.first_letter(), 'D');
        assert_eq!(word.last_letter(), 'K');
        assert_eq!(word.letters().to_string(), "CDIK");
        assert!(WordInfo::new("").is_none());
    }

    #[test]
    fn test_mapping_lookups() {
        let mapping = WordMapping::new(vec![info("ADGJ"), info("JBEHK"), info("JAD"), info("KCFIL")]);

        let starting_j: Vec<&str> = mapping
            .words_with_first_letter('J')
            .iter()
            .map(|w| w.word())
            .collect();
        assert_eq!(starting_j, vec!["JBEHK", "JAD"]);

        let ending_j: Vec<&str> = mapping
            .words_with_last_letter('j')
            .iter()
            .map(|w| w.word())
            .collect();
        assert_eq!(ending_j, vec!["ADGJ"]);

        assert!(mapping.words_with_first_letter('Z').is_empty());
        assert!(mapping.words_with_first_letter('?').is_empty());
        assert_eq!(mapping.len(), 4);
    }

    #[test]
    fn test_lookup_returns_independent_copy() {
        let mapping = WordMapping::new(vec![info("JBEHK"), info("JAD")]);

        let mut first = mapping.words_with_first_letter('J');
        first.truncate(1);
        first.reverse();

        assert_eq!(mapping.words_with_first_letter('J').len(), 2);
    }
}
