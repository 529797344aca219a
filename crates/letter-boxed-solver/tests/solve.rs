//! End-to-end tests for the letter-boxed solver.
//!
//! These drive the public API from puzzle and word list through to sorted
//! solutions, and check every solution against the puzzle rules.

use std::collections::HashSet;
use std::io::Cursor;
use std::time::Duration;

use letter_boxed_solver::{
    LetterSet, Puzzle, ScoringStrategy, Solution, SolveStatus, Solver, SolverConfig, WordSource,
};

const WORDS: &str = "\
ADGJ
JBEHK
KCFIL
LAD
DIAL
LIKE
EGAD
BIKE
KICK
FLAG
GLIB
JIBE
JADE
CHEF
HACK
ELK
ECHO
";

fn square(max_words: usize) -> Puzzle {
    Puzzle::from_json(&format!(
        r#"{{"maxWords": {}, "sides": ["abc", "def", "ghi", "jkl"]}}"#,
        max_words
    ))
    .unwrap()
}

fn dictionary() -> Vec<String> {
    WordSource::new(Cursor::new(WORDS)).read_all().unwrap()
}

fn solve_all(puzzle: Puzzle, config: &SolverConfig) -> Solver {
    let mut solver = Solver::new(puzzle, dictionary(), config);
    while !solver.is_finished() {
        solver.step();
    }
    solver
}

/// Check a solution against every puzzle rule
fn assert_valid(puzzle: &Puzzle, solution: &Solution) {
    let words = solution.words();

    assert!(!words.is_empty());
    assert!(words.len() <= puzzle.max_words(), "{} is too long", solution);

    for word in words {
        assert!(puzzle.is_word_allowed(word), "{} breaks the side rule", word);
    }

    for pair in words.windows(2) {
        assert_eq!(
            pair[0].chars().last(),
            pair[1].chars().next(),
            "{} does not chain",
            solution
        );
    }

    let distinct: HashSet<&String> = words.iter().collect();
    assert_eq!(distinct.len(), words.len(), "{} repeats a word", solution);

    let letters = LetterSet::from_words(words.iter().map(String::as_str));
    assert_eq!(letters, puzzle.letters(), "{} misses letters", solution);
}

#[cfg(test)]
mod solving {
    use super::*;

    #[test]
    fn test_every_solution_is_valid() {
        for max_words in 2..=4 {
            for scoring in [ScoringStrategy::Uniform, ScoringStrategy::Weighted] {
                let config = SolverConfig {
                    scoring,
                    ..SolverConfig::default()
                };
                let puzzle = square(max_words);
                let solver = solve_all(puzzle.clone(), &config);

                for solution in solver.solutions() {
                    assert_valid(&puzzle, solution);
                }
            }
        }
    }

    #[test]
    fn test_finds_known_chain() {
        let solver = solve_all(square(3), &SolverConfig::default());
        let found: Vec<String> = solver.solutions().iter().map(|s| s.to_string()).collect();

        assert!(found.contains(&"ADGJ, JBEHK, KCFIL".to_string()), "{:?}", found);
    }

    #[test]
    fn test_no_duplicate_solutions() {
        let solver = solve_all(square(4), &SolverConfig::default());
        let distinct: HashSet<&Solution> = solver.solutions().iter().collect();

        assert_eq!(distinct.len(), solver.solutions().len());
    }

    #[test]
    fn test_narrow_branching_still_valid() {
        let config = SolverConfig {
            max_branch: 1,
            ..SolverConfig::default()
        };
        let puzzle = square(4);
        let solver = solve_all(puzzle.clone(), &config);

        for solution in solver.solutions() {
            assert_valid(&puzzle, solution);
        }
    }

    #[test]
    fn test_incomplete_coverage_is_rejected() {
        let puzzle = Puzzle::new(&["ABC", "DEF", "GHI", "JKL"], 2).unwrap();
        let mut solver = Solver::new(puzzle, ["BAD", "DICK"], &SolverConfig::default());

        let report = solver.run(Duration::from_secs(5));

        assert_eq!(report.status, SolveStatus::Exhausted);
        assert!(solver.solutions().is_empty());
    }

    #[test]
    fn test_one_word_solution() {
        let puzzle = Puzzle::new(&["ABC", "DEF", "GHI", "JKL"], 3).unwrap();
        let solver = Solver::new(
            puzzle,
            ["ADGJBEHKCFIL", "ADGJ", "JBEHK"],
            &SolverConfig::default(),
        );

        assert_eq!(solver.steps_taken(), 0);
        assert_eq!(
            solver.solutions(),
            &[Solution::new(vec!["ADGJBEHKCFIL".to_string()])]
        );
    }
}

#[cfg(test)]
mod reporting {
    use super::*;

    #[test]
    fn test_sorted_by_word_count_then_length() {
        let solver = solve_all(square(4), &SolverConfig::default());
        let all = solver.solutions_by_word_count().all();

        assert_eq!(all.len(), solver.solutions().len());
        for pair in all.windows(2) {
            let key = |s: &Solution| (s.word_count(), s.total_chars());
            assert!(key(&pair[0]) <= key(&pair[1]), "{} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_written_file_matches_sorted_solutions() {
        let dir = tempfile::tempdir().unwrap();
        let outpath = letter_boxed_solver::report::solutions_path(dir.path(), "square");
        let solver = solve_all(square(3), &SolverConfig::default());

        let written =
            letter_boxed_solver::report::write_solutions(&solver.solutions_by_word_count(), &outpath)
                .unwrap();

        let contents = std::fs::read_to_string(&outpath).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        let expected: Vec<String> = written.iter().map(|s| s.to_string()).collect();
        assert_eq!(lines, expected);
    }
}
