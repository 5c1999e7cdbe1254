//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! Times both solvers on a fixed set of puzzles and reports the median of
//! several runs per puzzle.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the solutions found:      `cargo run --bin bench_local --release -- -p`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - Printing is kept outside the timed section.
//! - One untimed warm-up run per puzzle.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use cryptarithm::solver;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per puzzle (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print the solutions of the last run
    #[arg(short = 'p', long = "print")]
    print: bool,
}

/// Solutions requested from the uniqueness solver per puzzle.
const MAX_SOLUTIONS: usize = 10;

/// Puzzles to time: unique, ambiguous, unsolvable and borrow-heavy cases.
const CASES: [&str; 8] = [
    "SEND + MORE = MONEY",
    "EAT + THAT = APPLE",
    "TO + GO = OUT",
    "COUNT - COIN = SNUB",
    "NINE - TEN = TWO",
    "SEVEN - NINE = FOUR",
    "ABC + ABC = AB",
    "FORTY - TEN = SIXTY",
];

/// Robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        plural.map_or_else(|| format!("{singular}s"), str::to_string)
    }
}

/// Time `run` `repeats` times after one warm-up; returns the median seconds and the last result.
fn time_runs<T>(repeats: usize, mut run: impl FnMut() -> T) -> (f64, T) {
    let mut last = run();
    let mut times = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        let start = Instant::now();
        last = black_box(run());
        times.push(start.elapsed().as_secs_f64());
    }
    (median(times), last)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    cryptarithm::log::init_logger(false);

    let mut summary: Vec<(&str, f64, f64, usize)> = Vec::with_capacity(CASES.len());

    for (idx, &equation) in CASES.iter().enumerate() {
        eprintln!("\n[{:02}] {equation}", idx + 1);

        let (solve_med, solved) = time_runs(cli.num_repeats, || solver::solve_equation(black_box(equation)));
        let (check_med, checked) = time_runs(cli.num_repeats, || solver::check_equation(black_box(equation), MAX_SOLUTIONS));

        let solved = match solved {
            Ok(result) => result,
            Err(e) => {
                eprintln!("  ✗ {}", e.display_detailed());
                continue;
            }
        };
        let checked = checked?;

        if cli.print {
            for solution in &checked.solutions {
                println!("{}", solver::solution_to_string(&checked.puzzle, solution)?);
            }
        }

        let count = checked.solutions.len();
        eprintln!(
            "  → solve {solve_med:.6}s ({:?}); check {check_med:.6}s, {count} {}",
            solved.status,
            pluralizer(count, "solution", None)
        );
        summary.push((equation, solve_med, check_med, count));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<28} | {:>10} | {:>10} | {:>11}", "puzzle", "solve (s)", "check (s)", "# solutions");
    eprintln!("{:-<28}-+-{:-<10}-+-{:-<10}-+-{:-<11}", "", "", "", "");
    for (equation, solve_med, check_med, count) in &summary {
        eprintln!("{equation:<28} | {solve_med:>10.6} | {check_med:>10.6} | {count:>11}");
    }

    Ok(())
}
