//! Text-in, typed-result-out entry points used by the CLI and the wasm bindings.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with three variants:
//!
//! - S001: `ParseFailure` (Equation parsing failed (wraps [`ParseError`]))
//! - S002: `TooManyLetters` (More distinct letters than digits)
//! - S003: `VerificationFailed` (A solver answer did not check out)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use cryptarithm::solver;
//!
//! let result = solver::solve_equation("SEND + MORE = MONEY")?;
//! for solution in &result.solutions {
//!     println!("{}", solver::solution_to_string(&result.puzzle, solution)?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Checking Uniqueness
//!
//! ```
//! use cryptarithm::solver::{self, SolveStatus};
//!
//! let result = solver::check_equation("A + B = C", 2)?;
//!
//! match result.status {
//!     SolveStatus::Unique => println!("Exactly one answer"),
//!     SolveStatus::Ambiguous => println!("At least {} answers", result.solutions.len()),
//!     SolveStatus::NoSolution => println!("No answer"),
//!     SolveStatus::Solved => unreachable!("check_equation always counts"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use cryptarithm::solver;
//!
//! if let Err(e) = solver::solve_equation("SEND * MORE = MONEY") {
//!     // code, message and help text
//!     eprintln!("{}", e.display_detailed());
//! }
//! ```

use log::{debug, warn};

use crate::assignment::Assignment;
use crate::errors::ParseError;
use crate::letters::MAX_LETTERS;
use crate::puzzle::Puzzle;
use crate::unique::DEFAULT_MAX_SOLUTIONS;

/// Outcome of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A solution was found; uniqueness was not checked.
    Solved,

    /// Exactly one solution exists.
    Unique,

    /// Two or more solutions exist; `solutions` holds as many as were requested.
    Ambiguous,

    /// No assignment satisfies the puzzle.
    NoSolution,
}

/// Successful solver run (including runs that found nothing).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The parsed, normalized puzzle.
    pub puzzle: Puzzle,
    /// Verified solutions.
    pub solutions: Vec<Assignment>,
    pub status: SolveStatus,
}

impl SolveResult {
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.status == SolveStatus::Unique
    }
}

impl IntoIterator for SolveResult {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Unified error type for the solver pipeline.
///
/// Callers handle a single `Result<_, SolverError>` whether the input failed
/// to parse, could never be solved, or produced an answer that did not verify.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Failure while parsing the equation string into a `Puzzle`.
    ///
    /// These originate from the parser (`ParseError`), which we box to keep the
    /// error type size stable.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    /// The puzzle uses more distinct letters than there are digits.
    #[error("too many distinct letters: {count} (at most {max})", max = MAX_LETTERS)]
    TooManyLetters { count: usize },

    /// A solver returned an assignment that does not satisfy the puzzle.
    #[error("verification failed: {context}")]
    VerificationFailed { context: String },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
            SolverError::TooManyLetters { .. } => "S002",
            SolverError::VerificationFailed { .. } => "S003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Equation parsing failed",
            SolverError::TooManyLetters { .. } => "More distinct letters than digits",
            SolverError::VerificationFailed { .. } => "Internal error: solver answer did not verify",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "The input equation could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            SolverError::TooManyLetters { .. } => "Each distinct letter must stand for a different digit, so a cryptarithm can use at most ten distinct letters.",
            SolverError::VerificationFailed { .. } => "Every answer is re-checked against the puzzle before it is returned. This error means a solver produced an assignment that breaks the arithmetic or the digit rules, which is a bug in the solver logic.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::TooManyLetters { .. } => Some("Choose words that share more letters, e.g. 'SEND + MORE = MONEY' uses 8"),
            SolverError::VerificationFailed { .. } => Some("This is an internal error. Please report the equation that triggered it."),
            SolverError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// The puzzle with digits filled in, followed by the letter table:
/// `9567 + 1085 = 10652 [D→7, E→5, …]`.
///
/// # Errors
///
/// Will return `SolverError::VerificationFailed` if `solution` leaves a letter of `puzzle` unbound.
pub fn solution_to_string(puzzle: &Puzzle, solution: &Assignment) -> Result<String, SolverError> {
    let substituted = puzzle.substitute(solution).ok_or_else(|| SolverError::VerificationFailed {
        context: format!("{solution} does not bind every letter of {puzzle}"),
    })?;
    Ok(format!("{substituted} {solution}"))
}

fn parse_and_guard(input: &str) -> Result<Puzzle, SolverError> {
    let puzzle = input.parse::<Puzzle>()?;
    debug!("parsed {puzzle}");

    let count = puzzle.letter_count();
    if count > MAX_LETTERS {
        return Err(SolverError::TooManyLetters { count });
    }
    Ok(puzzle)
}

fn verify(puzzle: &Puzzle, solution: &Assignment) -> Result<(), SolverError> {
    if puzzle.is_satisfied_by(solution) {
        Ok(())
    } else {
        warn!("rejected {solution} for {puzzle}");
        Err(SolverError::VerificationFailed { context: format!("{solution} does not satisfy {puzzle}") })
    }
}

/// Parse `input` and find any solution with the backtracking solver.
///
/// # Errors
///
/// Returns a [`SolverError`] if:
/// - the equation string cannot be parsed (`ParseFailure`),
/// - the puzzle has more than ten distinct letters (`TooManyLetters`),
/// - or the answer fails verification (`VerificationFailed`).
pub fn solve_equation(input: &str) -> Result<SolveResult, SolverError> {
    let puzzle = parse_and_guard(input)?;

    let solutions: Vec<Assignment> = puzzle.solve().into_iter().collect();
    for solution in &solutions {
        verify(&puzzle, solution)?;
    }

    let status = if solutions.is_empty() { SolveStatus::NoSolution } else { SolveStatus::Solved };
    debug!("{puzzle}: {status:?}");
    Ok(SolveResult { puzzle, solutions, status })
}

/// Parse `input` and enumerate up to `max_solutions` solutions with the
/// uniqueness solver. At least two are always requested so that a unique
/// puzzle can be told from an ambiguous one.
///
/// # Errors
///
/// Same as [`solve_equation`].
pub fn check_equation(input: &str, max_solutions: usize) -> Result<SolveResult, SolverError> {
    let puzzle = parse_and_guard(input)?;

    let solutions = puzzle.solutions(max_solutions.max(DEFAULT_MAX_SOLUTIONS));
    for solution in &solutions {
        verify(&puzzle, solution)?;
    }

    let status = match solutions.len() {
        0 => SolveStatus::NoSolution,
        1 => SolveStatus::Unique,
        _ => SolveStatus::Ambiguous,
    };
    debug!("{puzzle}: {status:?} ({} listed)", solutions.len());
    Ok(SolveResult { puzzle, solutions, status })
}
