//! Solutions, their content hashes, and grouping for reports.

use std::collections::hash_map::RandomState;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Delimiter between words when a solution is written out
pub const WORD_DELIMITER: &str = ", ";

/// Ordered words of a solution, in play order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn total_chars(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).sum()
    }

    pub fn reversed(&self) -> Self {
        Self {
            words: self.words.iter().rev().cloned().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Solution {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(WORD_DELIMITER))
    }
}

/// Order-sensitive 64-bit content hash for word sequences.
///
/// One hasher is created per solver run and shared by every dedup site, so
/// hashes are stable within a run but differ between runs. Two sequences
/// with equal hashes are treated as the same solution.
#[derive(Debug, Clone, Default)]
pub struct SolutionHasher {
    state: RandomState,
}

impl SolutionHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_words<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> u64 {
        let mut hasher = self.state.build_hasher();
        let mut count = 0usize;
        for word in words {
            // str hashing appends a terminator, so ["AB", "C"] != ["A", "BC"]
            word.hash(&mut hasher);
            count += 1;
        }
        count.hash(&mut hasher);
        hasher.finish()
    }

    pub fn hash(&self, solution: &Solution) -> u64 {
        self.hash_words(solution.words.iter().map(String::as_str))
    }
}

/// Solutions grouped by word count, deduplicated within each group
#[derive(Debug, Clone, Default)]
pub struct SolutionsByWordCount {
    groups: BTreeMap<usize, Vec<Solution>>,
    seen: HashSet<Solution>,
}

impl SolutionsByWordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a solution; returns false if the same word sequence is already present.
    pub fn add(&mut self, solution: Solution) -> bool {
        if !self.seen.insert(solution.clone()) {
            return false;
        }
        self.groups
            .entry(solution.word_count())
            .or_default()
            .push(solution);
        true
    }

    pub fn get(&self, word_count: usize) -> &[Solution] {
        self.groups
            .get(&word_count)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Word counts that have at least one solution, ascending
    pub fn word_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Every solution, fewest words first, then fewest letters. Ties keep
    /// insertion order.
    pub fn all(&self) -> Vec<Solution> {
        let mut all = Vec::with_capacity(self.len());
        for group in self.groups.values() {
            let mut group = group.clone();
            group.sort_by_key(Solution::total_chars);
            all.extend(group);
        }
        all
    }
}

impl FromIterator<Solution> for SolutionsByWordCount {
    fn from_iter<T: IntoIterator<Item = Solution>>(iter: T) -> Self {
        let mut grouped = Self::new();
        for solution in iter {
            grouped.add(solution);
        }
        grouped
    }
}

impl Extend<Solution> for SolutionsByWordCount {
    fn extend<T: IntoIterator<Item = Solution>>(&mut self, iter: T) {
        for solution in iter {
            self.add(solution);
        }
    }
}
