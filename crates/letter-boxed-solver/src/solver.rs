//! Resumable, step-wise solver.
//!
//! Construction filters the dictionary, collects words that solve the
//! puzzle on their own, and queues every other word as a start word for an
//! [`Explorer`]. Each [`Solver::step`] explores one start word to completion
//! and merges its solutions into the running, deduplicated list. The caller
//! owns the clock: [`Solver::run`] is the usual loop, checking a deadline
//! between steps only.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::explorer::Explorer;
use crate::puzzle::Puzzle;
use crate::scoring::{Scoring, ScoringStrategy};
use crate::solution::{Solution, SolutionHasher, SolutionsByWordCount};
use crate::word::{WordInfo, WordMapping};

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Most candidate words followed from any one search node
    pub max_branch: usize,
    /// Heuristic used to order start words and prune branches
    pub scoring: ScoringStrategy,
    /// Time budget for [`Solver::run_with_config_timeout`]
    pub timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_branch: 5,
            scoring: ScoringStrategy::default(),
            timeout: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Start words remain to be explored
    Ready,
    /// Every start word has been explored
    Finished,
}

/// Why a [`Solver::run`] loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every start word was explored
    Exhausted,
    /// The time budget ran out first. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Summary of a [`Solver::run`] loop
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub status: SolveStatus,
    /// Steps taken during this run
    pub steps: usize,
    /// Total solutions held by the solver afterwards
    pub solutions_found: usize,
    pub elapsed: Duration,
}

pub struct Solver {
    puzzle: Puzzle,
    mapping: WordMapping,
    scoring: Scoring,
    hasher: SolutionHasher,
    max_branch: usize,
    /// Pool positions still to explore; the best prospect is at the end
    pending: Vec<usize>,
    solutions: Vec<Solution>,
    existing: HashSet<u64>,
    steps: usize,
    timeout: Duration,
}

impl Solver {
    /// Build a solver over `words`. Words are trimmed and upper-cased;
    /// duplicates and words the puzzle does not allow are dropped.
    pub fn new<I, S>(puzzle: Puzzle, words: I, config: &SolverConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = filter_words(&puzzle, words);

        info!("making word graph");

        let hasher = SolutionHasher::new();
        let mut solutions = Vec::new();
        let mut existing = HashSet::new();
        let mut unsolved = Vec::new();

        for word in allowed {
            let Some(info) = WordInfo::new(word) else {
                continue;
            };

            if puzzle.do_letters_solve(info.letters()) {
                let solution = Solution::new(vec![info.word().to_string()]);
                if existing.insert(hasher.hash(&solution)) {
                    solutions.push(solution);
                }
            } else {
                unsolved.push(info);
            }
        }

        let scoring = Scoring::build(config.scoring, &unsolved);

        // Sorted ascending so the best prospect is popped first
        let scores: Vec<f64> = unsolved
            .iter()
            .map(|info| scoring.score(&info.letters()))
            .collect();
        let mut pending: Vec<usize> = (0..unsolved.len()).collect();
        pending.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        info!(
            "{} one-word solutions, {} start words to explore (max branch {}, {:?} scoring)",
            solutions.len(),
            unsolved.len(),
            config.max_branch,
            config.scoring
        );

        Self {
            puzzle,
            mapping: WordMapping::new(unsolved),
            scoring,
            hasher,
            max_branch: config.max_branch,
            pending,
            solutions,
            existing,
            steps: 0,
            timeout: config.timeout,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> SolverState {
        if self.pending.is_empty() {
            SolverState::Finished
        } else {
            SolverState::Ready
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == SolverState::Finished
    }

    /// Start words not yet explored
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The start word the next [`step`](Self::step) will explore
    pub fn next_start(&self) -> Option<&WordInfo> {
        self.pending
            .last()
            .and_then(|&position| self.mapping.get(position))
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Allowed words that do not solve the puzzle alone
    pub fn pool(&self) -> &[WordInfo] {
        self.mapping.words()
    }

    /// Solutions found so far, in discovery order
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn solutions_by_word_count(&self) -> SolutionsByWordCount {
        self.solutions.iter().cloned().collect()
    }

    /// Explore the highest-priority pending start word. Runs to completion
    /// regardless of any deadline. Returns the number of new solutions; a
    /// finished solver does nothing and returns 0.
    pub fn step(&mut self) -> usize {
        let Some(position) = self.pending.pop() else {
            return 0;
        };
        let Some(start) = self.mapping.get(position) else {
            return 0;
        };

        let explorer = Explorer::new(
            start,
            &self.puzzle,
            &self.mapping,
            self.max_branch,
            &self.scoring,
            &self.hasher,
        );
        let (found, stats) = explorer.explore_with_stats();
        self.steps += 1;

        let total = found.len();
        let mut added = 0;
        for solution in found {
            // equal 64-bit hashes count as the same solution
            if self.existing.insert(self.hasher.hash(&solution)) {
                self.solutions.push(solution);
                added += 1;
            }
        }

        debug!(
            "step {}: explored {} ({} nodes, {} pruned), {} solutions, {} new",
            self.steps,
            start.word(),
            stats.nodes_expanded,
            stats.candidates_pruned,
            total,
            added
        );

        added
    }

    /// Step until finished or until `timeout` has elapsed. The timeout is a
    /// soft bound: it is checked between steps and a running step is never
    /// interrupted.
    pub fn run(&mut self, timeout: Duration) -> SolveReport {
        let start_time = Instant::now();
        let steps_before = self.steps;

        info!("solving puzzle (max time {:.3}s)", timeout.as_secs_f64());

        while !self.is_finished() && start_time.elapsed() <= timeout {
            self.step();
        }

        let elapsed = start_time.elapsed();
        let status = if self.is_finished() {
            SolveStatus::Exhausted
        } else {
            SolveStatus::TimedOut { elapsed }
        };

        info!(
            "done solving in {:.3}s: {} steps, {} solutions, {} start words left",
            elapsed.as_secs_f64(),
            self.steps - steps_before,
            self.solutions.len(),
            self.pending.len()
        );

        SolveReport {
            status,
            steps: self.steps - steps_before,
            solutions_found: self.solutions.len(),
            elapsed,
        }
    }

    /// [`run`](Self::run) with the timeout from the solver's config
    pub fn run_with_config_timeout(&mut self) -> SolveReport {
        self.run(self.timeout)
    }
}

/// Normalise, deduplicate and filter the dictionary through the puzzle rules.
fn filter_words<I, S>(puzzle: &Puzzle, words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = 0;
    let mut seen = HashSet::new();
    let mut allowed = Vec::new();

    for word in words {
        total += 1;
        let word = word.as_ref().trim().to_ascii_uppercase();
        if puzzle.is_word_allowed(&word) && seen.insert(word.clone()) {
            allowed.push(word);
        }
    }

    info!("loaded words: {} total, {} valid", total, allowed.len());

    allowed
}
