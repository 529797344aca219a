//! CLI entry point for the letter-boxed solver.
//!
//! Usage:
//!   letter-boxed list [DIR]
//!   letter-boxed solve --puzzle <puzzle.json> --words <words.txt> [options]
//!   letter-boxed solve --sides ABC,DEF,GHI,JKL --max-words 3 --words <words.txt> [options]
//!
//! Options:
//!   --max-branch <n>     Max candidate words followed per search node (default: 5)
//!   --max-time-ms <n>    Time budget in milliseconds (default: 250)
//!   --scoring <s>        uniform | weighted (default: weighted)
//!   --outdir <dir>       Where to write <name>-solutions.txt (default: .)
//!   --name <name>        Puzzle name used for the output file
//!   --debug              Debug logging

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use letter_boxed_solver::report::{solutions_path, write_solutions};
use letter_boxed_solver::{
    load_words, Error, Puzzle, PuzzleDefinition, PuzzleError, ScoringStrategy, Solution,
    SolveStatus, Solver, SolverConfig,
};

#[derive(Parser)]
#[command(name = "letter-boxed")]
#[command(about = "Bounded heuristic solver for letter-boxed word puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List puzzle files in a directory
    List {
        /// Directory holding *.json puzzle files
        #[arg(value_name = "DIR", default_value = "puzzles")]
        dir: PathBuf,
    },

    /// Solve a puzzle and write its solutions file
    #[command(group(ArgGroup::new("source").required(true).args(["puzzle", "sides"])))]
    Solve {
        /// Path to a puzzle JSON file
        #[arg(long, value_name = "FILE")]
        puzzle: Option<PathBuf>,

        /// Puzzle sides given directly, comma separated
        #[arg(long, value_delimiter = ',')]
        sides: Option<Vec<String>>,

        /// Maximum words per solution when using --sides
        #[arg(long, default_value = "3", conflicts_with = "puzzle")]
        max_words: usize,

        /// Word list, one word per line
        #[arg(long, value_name = "FILE")]
        words: PathBuf,

        /// Maximum candidate words followed from a search node
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
        max_branch: u64,

        /// Maximum time to spend solving, in milliseconds
        #[arg(long, default_value = "250")]
        max_time_ms: u64,

        /// Heuristic for ordering and pruning candidates
        #[arg(long, value_enum, default_value_t = ScoringArg::Weighted)]
        scoring: ScoringArg,

        /// Output directory (created if it does not exist)
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,

        /// Name for the solutions file (defaults to the puzzle file stem)
        #[arg(long)]
        name: Option<String>,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScoringArg {
    Uniform,
    Weighted,
}

impl From<ScoringArg> for ScoringStrategy {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Uniform => ScoringStrategy::Uniform,
            ScoringArg::Weighted => ScoringStrategy::Weighted,
        }
    }
}

/// Summary printed after solving
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    puzzle: PuzzleDefinition,
    solutions_found: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_solution: Option<Solution>,
    steps: usize,
    finished: bool,
    elapsed_ms: u64,
    output_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { dir } => {
            letter_boxed_solver::log::init_logger(false);
            list_puzzles(&dir)
        }
        Commands::Solve {
            puzzle,
            sides,
            max_words,
            words,
            max_branch,
            max_time_ms,
            scoring,
            outdir,
            name,
            debug,
        } => {
            let debug_enabled = debug || std::env::var("LETTER_BOXED_DEBUG").is_ok();
            letter_boxed_solver::log::init_logger(debug_enabled);

            let config = SolverConfig {
                max_branch: max_branch as usize,
                scoring: scoring.into(),
                timeout: Duration::from_millis(max_time_ms),
            };

            solve(puzzle, sides, max_words, &words, &config, &outdir, name)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn list_puzzles(dir: &Path) -> Result<(), Error> {
    let entries = fs::read_dir(dir)
        .map_err(|e| Error::io(format!("failed to read puzzle dir {:?}", dir), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("failed to read puzzle entry", e))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    log::info!("found {} puzzle files", names.len());

    for name in names {
        println!("{}", name);
    }

    Ok(())
}

fn solve(
    puzzle_file: Option<PathBuf>,
    sides: Option<Vec<String>>,
    max_words: usize,
    words_file: &Path,
    config: &SolverConfig,
    outdir: &Path,
    name: Option<String>,
) -> Result<(), Error> {
    let puzzle = match (&puzzle_file, sides) {
        (Some(path), _) => {
            let json = fs::read_to_string(path)
                .map_err(|e| Error::io(format!("failed to read puzzle file {:?}", path), e))?;
            Puzzle::from_json(&json)?
        }
        (None, Some(sides)) => Puzzle::new(&sides, max_words)?,
        (None, None) => return Err(PuzzleError::NoSides.into()),
    };

    let name = name
        .or_else(|| {
            puzzle_file
                .as_deref()
                .and_then(Path::file_stem)
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "puzzle".to_string());
    let outpath = solutions_path(outdir, &name);

    log::info!(
        "loaded puzzle: sides {:?}, letters {}, max words {}",
        puzzle.sides(),
        puzzle.letters(),
        puzzle.max_words()
    );

    let words = load_words(words_file)?;

    let mut solver = Solver::new(puzzle, words, config);
    let report = solver.run_with_config_timeout();

    if let SolveStatus::TimedOut { elapsed } = report.status {
        log::warn!(
            "stopped after {:.3}s with {} start words unexplored",
            elapsed.as_secs_f64(),
            solver.pending()
        );
    }

    let all = write_solutions(&solver.solutions_by_word_count(), &outpath)?;

    let output = SolveOutput {
        puzzle: solver.puzzle().clone().into(),
        solutions_found: all.len(),
        best_solution: all.first().cloned(),
        steps: report.steps,
        finished: solver.is_finished(),
        elapsed_ms: report.elapsed.as_millis() as u64,
        output_path: outpath,
    };

    let json = serde_json::to_string_pretty(&output)?;
    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("letter-boxed").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_max_words_conflicts_with_puzzle_file() {
        let err = parse(&["solve", "--puzzle", "p.json", "--words", "w.txt", "--max-words", "4"])
            .err()
            .unwrap();

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_max_words_with_sides() {
        let cli = parse(&["solve", "--sides", "ABC,DEF", "--words", "w.txt", "--max-words", "4"])
            .unwrap();

        match cli.command {
            Commands::Solve {
                sides, max_words, ..
            } => {
                assert_eq!(sides, Some(vec!["ABC".to_string(), "DEF".to_string()]));
                assert_eq!(max_words, 4);
            }
            Commands::List { .. } => panic!("expected solve"),
        }
    }

    #[test]
    fn test_puzzle_file_keeps_default_max_words() {
        assert!(parse(&["solve", "--puzzle", "p.json", "--words", "w.txt"]).is_ok());
    }
}
