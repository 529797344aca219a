//! Heuristic scores for letter sets.
//!
//! Scores only order candidates: the solver uses them to pick which start
//! word to explore next and which branches survive the fan-out cap. They
//! never decide whether a chain is a solution.

use serde::{Deserialize, Serialize};

use crate::letter_set::{letter_index, LetterSet, ALPHABET_SIZE};
use crate::word::WordInfo;

/// Which scoring variant a solver uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// Every letter is worth 1
    Uniform,
    /// Letters are worth the fraction of pool words that contain them
    #[default]
    Weighted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scoring {
    Uniform,
    Weighted(WeightedScoring),
}

impl Scoring {
    pub fn build(strategy: ScoringStrategy, pool: &[WordInfo]) -> Self {
        match strategy {
            ScoringStrategy::Uniform => Scoring::Uniform,
            ScoringStrategy::Weighted => Scoring::Weighted(WeightedScoring::new(pool)),
        }
    }

    pub fn score(&self, letters: &LetterSet) -> f64 {
        match self {
            Scoring::Uniform => letters.len() as f64,
            Scoring::Weighted(weighted) => weighted.score(letters),
        }
    }
}

/// Per-letter weights computed from letter frequency across a word pool
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScoring {
    weights: [f64; ALPHABET_SIZE],
}

impl WeightedScoring {
    pub fn new(pool: &[WordInfo]) -> Self {
        let mut totals = [0usize; ALPHABET_SIZE];
        for info in pool {
            for letter in info.letters().iter() {
                if let Some(i) = letter_index(letter) {
                    totals[i] += 1;
                }
            }
        }

        let mut weights = [0.0; ALPHABET_SIZE];
        if !pool.is_empty() {
            let num_words = pool.len() as f64;
            for (weight, total) in weights.iter_mut().zip(totals) {
                *weight = total as f64 / num_words;
            }
        }

        Self { weights }
    }

    pub fn weight(&self, letter: char) -> f64 {
        letter_index(letter).map_or(0.0, |i| self.weights[i])
    }

    pub fn score(&self, letters: &LetterSet) -> f64 {
        letters.iter().map(|letter| self.weight(letter)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<WordInfo> {
        words.iter().filter_map(|w| WordInfo::new(*w)).collect()
    }

    #[test]
    fn test_uniform_is_cardinality() {
        let scoring = Scoring::build(ScoringStrategy::Uniform, &[]);
        assert_eq!(scoring.score(&LetterSet::from_word("ABCA")), 3.0);
        assert_eq!(scoring.score(&LetterSet::empty()), 0.0);
    }

    #[test]
    fn test_weights_are_word_fractions() {
        let words = pool(&["ADGJ", "JAD", "KCFIL", "LIK"]);
        let weighted = WeightedScoring::new(&words);

        assert_eq!(weighted.weight('A'), 0.5);
        assert_eq!(weighted.weight('J'), 0.5);
        assert_eq!(weighted.weight('G'), 0.25);
        assert_eq!(weighted.weight('Z'), 0.0);
    }

    #[test]
    fn test_weighted_score_is_sum_of_weights() {
        let words = pool(&["ADGJ", "JAD", "KCFIL", "LIK"]);
        let scoring = Scoring::build(ScoringStrategy::Weighted, &words);

        // A (0.5) + G (0.25)
        assert_eq!(scoring.score(&LetterSet::from_word("AG")), 0.75);
        // Common letters beat a larger set of rare ones
        assert!(
            scoring.score(&LetterSet::from_word("AJ")) > scoring.score(&LetterSet::from_word("GC"))
        );
    }

    #[test]
    fn test_empty_pool_weights_nothing() {
        let scoring = Scoring::build(ScoringStrategy::Weighted, &[]);
        assert_eq!(scoring.score(&LetterSet::from_word("ABC")), 0.0);
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScoringStrategy::Uniform).unwrap(),
            "\"uniform\""
        );
        assert_eq!(
            serde_json::from_str::<ScoringStrategy>("\"weighted\"").unwrap(),
            ScoringStrategy::Weighted
        );
    }
}
