//! Bidirectional bounded search from a single start word.
//!
//! An [`Explorer`] grows chains to the right (next word starts with the
//! chain's last letter) and to the left (previous word ends with the chain's
//! first letter), each at most `max_words` long. Fan-out at every node is
//! capped at `max_branch` candidates, ranked by the letters they would add.
//! Chains one word short of the limit are kept as incomplete halves and
//! greedily joined across the start word afterwards.

use std::collections::HashSet;

use smallvec::{smallvec, SmallVec};

use crate::letter_set::LetterSet;
use crate::puzzle::Puzzle;
use crate::scoring::Scoring;
use crate::solution::{Solution, SolutionHasher};
use crate::word::{WordInfo, WordMapping};

/// Words of a chain in the order they were added
type Chain<'a> = SmallVec<[&'a WordInfo; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Prepend words whose last letter is the chain's first letter
    Left,
    /// Append words whose first letter is the chain's last letter
    Right,
}

/// Counters gathered during one exploration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExploreStats {
    /// Nodes whose candidates were fetched
    pub nodes_expanded: usize,
    /// Candidates returned by the word mapping before the fan-out cap
    pub candidates_examined: usize,
    /// Candidates dropped by the fan-out cap
    pub candidates_pruned: usize,
    /// Most candidates followed from a single node
    pub max_fanout: usize,
}

/// Chains found by one directional search
struct ExploreResults<'a> {
    complete: Vec<Chain<'a>>,
    incomplete: Vec<Chain<'a>>,
    existing: HashSet<u64>,
}

impl<'a> ExploreResults<'a> {
    fn new() -> Self {
        Self {
            complete: Vec::new(),
            incomplete: Vec::new(),
            existing: HashSet::new(),
        }
    }

    /// Returns false if an equal chain (by hash) was already recorded.
    fn record(&mut self, chain: &Chain<'a>, hasher: &SolutionHasher) -> bool {
        self.existing
            .insert(hasher.hash_words(chain.iter().map(|info| info.word())))
    }

    fn add_complete(&mut self, chain: &Chain<'a>, hasher: &SolutionHasher) {
        if self.record(chain, hasher) {
            self.complete.push(chain.clone());
        }
    }

    fn add_incomplete(&mut self, chain: &Chain<'a>, hasher: &SolutionHasher) {
        if self.record(chain, hasher) {
            self.incomplete.push(chain.clone());
        }
    }
}

/// Searches for solutions that include one particular start word
pub struct Explorer<'a> {
    start: &'a WordInfo,
    puzzle: &'a Puzzle,
    mapping: &'a WordMapping,
    max_branch: usize,
    scoring: &'a Scoring,
    hasher: &'a SolutionHasher,
}

impl<'a> Explorer<'a> {
    pub fn new(
        start: &'a WordInfo,
        puzzle: &'a Puzzle,
        mapping: &'a WordMapping,
        max_branch: usize,
        scoring: &'a Scoring,
        hasher: &'a SolutionHasher,
    ) -> Self {
        Self {
            start,
            puzzle,
            mapping,
            max_branch,
            scoring,
            hasher,
        }
    }

    /// All complete solutions found from the start word. Solutions from the
    /// left search, the right search and the cross-merge are concatenated
    /// without deduplicating between them.
    pub fn explore(&self) -> Vec<Solution> {
        self.explore_with_stats().0
    }

    pub fn explore_with_stats(&self) -> (Vec<Solution>, ExploreStats) {
        let mut stats = ExploreStats::default();
        let left = self.search(Direction::Left, &mut stats);
        let right = self.search(Direction::Right, &mut stats);

        let mut complete: Vec<Solution> = left
            .complete
            .iter()
            .map(|chain| to_solution(chain.iter().rev().copied()))
            .collect();
        complete.extend(right.complete.iter().map(|chain| to_solution(chain.iter().copied())));

        for backwards in &left.incomplete {
            // Reading order; ends with the start word
            let left_chain: Chain<'a> = backwards.iter().rev().copied().collect();
            for right_chain in &right.incomplete {
                complete.extend(self.find_crossing_solutions(&left_chain, &right_chain[1..]));
            }
        }

        (complete, stats)
    }

    fn search(&self, direction: Direction, stats: &mut ExploreStats) -> ExploreResults<'a> {
        let mut results = ExploreResults::new();
        let mut chain: Chain<'a> = smallvec![self.start];

        self.explore_from(&mut chain, self.start.letters(), direction, &mut results, stats);

        results
    }

    fn explore_from(
        &self,
        chain: &mut Chain<'a>,
        letters: LetterSet,
        direction: Direction,
        results: &mut ExploreResults<'a>,
        stats: &mut ExploreStats,
    ) {
        let max_words = self.puzzle.max_words();

        if self.puzzle.do_letters_solve(letters) {
            results.add_complete(chain, self.hasher);
            return;
        } else if chain.len() == max_words - 1 {
            results.add_incomplete(chain, self.hasher);
        }

        if chain.len() >= max_words {
            return;
        }

        let Some(&current) = chain.last() else {
            return;
        };

        let candidates = self.candidates(direction, current, letters, stats);
        for candidate in candidates {
            // no word twice in one chain
            if chain.iter().any(|info| info.word() == candidate.word()) {
                continue;
            }

            chain.push(candidate);
            self.explore_from(
                chain,
                letters | candidate.letters(),
                direction,
                results,
                stats,
            );
            chain.pop();
        }
    }

    /// Words that can extend the chain past `current`, capped at `max_branch`.
    fn candidates(
        &self,
        direction: Direction,
        current: &WordInfo,
        letters: LetterSet,
        stats: &mut ExploreStats,
    ) -> Vec<&'a WordInfo> {
        let mut candidates = match direction {
            Direction::Left => self.mapping.words_with_last_letter(current.first_letter()),
            Direction::Right => self.mapping.words_with_first_letter(current.last_letter()),
        };

        stats.nodes_expanded += 1;
        stats.candidates_examined += candidates.len();

        if candidates.len() > self.max_branch {
            stats.candidates_pruned += candidates.len() - self.max_branch;
            self.reduce_candidates(&mut candidates, letters);
        }

        stats.max_fanout = stats.max_fanout.max(candidates.len());
        candidates
    }

    /// Keep the `max_branch` candidates that add the highest-scoring new
    /// letters. Equal scores keep mapping order.
    fn reduce_candidates(&self, candidates: &mut Vec<&'a WordInfo>, letters: LetterSet) {
        let mut scored: Vec<(f64, &'a WordInfo)> = candidates
            .iter()
            .map(|&info| (self.scoring.score(&(info.letters() - letters)), info))
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(self.max_branch);

        *candidates = scored.into_iter().map(|(_, info)| info).collect();
    }

    /// Greedily join each suffix of `left` (which ends with the start word)
    /// with the words of `right` (which follow the start word), stopping at
    /// the first join that covers the puzzle or at `max_words` words.
    fn find_crossing_solutions(
        &self,
        left: &[&'a WordInfo],
        right: &[&'a WordInfo],
    ) -> Vec<Solution> {
        let max_words = self.puzzle.max_words();
        let mut solutions = Vec::new();

        for start in 0..left.len().saturating_sub(1) {
            let mut words: Chain<'a> = left[start..].iter().copied().collect();
            let mut letters = words
                .iter()
                .fold(LetterSet::empty(), |acc, info| acc | info.letters());

            for &next in right {
                if words.iter().any(|info| info.word() == next.word()) {
                    break;
                }

                words.push(next);
                letters = letters | next.letters();

                if self.puzzle.do_letters_solve(letters) {
                    solutions.push(to_solution(words.iter().copied()));
                    break;
                } else if words.len() >= max_words {
                    break;
                }
            }
        }

        solutions
    }
}

fn to_solution<'w>(chain: impl Iterator<Item = &'w WordInfo>) -> Solution {
    chain.map(|info| info.word().to_string()).collect()
}
