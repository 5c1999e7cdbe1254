use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::time::Instant;

use cryptarithm::generator::{self, GeneratorConfig};
use cryptarithm::solver::{self, SolveStatus};
use cryptarithm::unique::DEFAULT_MAX_SOLUTIONS;
use cryptarithm::word_list::WordList;
use cryptarithm::Operation;

/// Cryptarithm solver, uniqueness checker and puzzle generator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Log search statistics (same as setting CRYPTARITHM_DEBUG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find one solution (e.g., "SEND + MORE = MONEY")
    Solve {
        equation: String,
    },

    /// Count solutions to decide whether the puzzle is unique
    Check {
        equation: String,

        /// Maximum number of solutions to list
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_SOLUTIONS)]
        max_solutions: usize,
    },

    /// Generate a uniquely solvable puzzle from a word list
    Generate {
        /// Operator of the generated puzzle: + or -
        #[arg(long, default_value = "+", allow_hyphen_values = true)]
        op: Operation,

        /// Path to the word list file (word or word;score per line)
        #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt"))]
        word_list: String,

        /// Minimum score filter
        #[arg(short = 'm', long, default_value_t = 0)]
        min_score: i32,

        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Entry point of the cryptarithm CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("CRYPTARITHM_DEBUG").is_ok();
    cryptarithm::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Run one subcommand: solutions go to stdout, status and timings to stderr.
fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Solve { equation } => {
            let t_solve = Instant::now();
            let result = solver::solve_equation(&equation)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            for solution in &result.solutions {
                println!("{}", solver::solution_to_string(&result.puzzle, solution)?);
            }
            if result.status == SolveStatus::NoSolution {
                eprintln!("✗ {} has no solution", result.puzzle);
            }
            eprintln!("Solved in {solve_secs:.3}s.");
        }

        Command::Check { equation, max_solutions } => {
            let t_solve = Instant::now();
            let result = solver::check_equation(&equation, max_solutions)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            for solution in &result.solutions {
                println!("{}", solver::solution_to_string(&result.puzzle, solution)?);
            }
            match result.status {
                SolveStatus::Unique => eprintln!("✓ {} has exactly one solution", result.puzzle),
                SolveStatus::Ambiguous => {
                    eprintln!("⚠️  {} has at least {} solutions", result.puzzle, result.solutions.len());
                }
                SolveStatus::NoSolution | SolveStatus::Solved => eprintln!("✗ {} has no solution", result.puzzle),
            }
            eprintln!("Checked in {solve_secs:.3}s.");
        }

        Command::Generate { op, word_list, min_score, seed } => {
            let t_load = Instant::now();
            let words = WordList::load_from_path(&word_list, min_score)?;
            let load_secs = t_load.elapsed().as_secs_f64();

            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };

            let t_gen = Instant::now();
            let generated = generator::generate_puzzle(op, &words.as_strs(), &GeneratorConfig::default(), &mut rng)
                .ok_or_else(|| format!("no uniquely solvable {op} puzzle found in {word_list}"))?;
            let gen_secs = t_gen.elapsed().as_secs_f64();

            println!("{}", generated.puzzle);
            for group in &generated.digit_groups {
                println!("  {group}");
            }
            eprintln!(
                "Loaded {} words in {load_secs:.3}s; generated in {gen_secs:.3}s.",
                words.len()
            );
        }
    }

    Ok(())
}
