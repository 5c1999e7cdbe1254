//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `ParseError` and `SolverError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use cryptarithm::errors::ParseError;
use cryptarithm::solver::SolverError;

/// Append one Markdown section per error. Works for any error type with
/// `code()`, `description()`, `details()`, `help()` and `display_detailed()`.
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{}\n```\n", help_text);
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{}\n```\n", error);
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::ParseFailure { s: "SEND + = MONEY".to_string() },
        ParseError::EmptyEquation,
        ParseError::InvalidWord { word: "S3ND".to_string(), invalid_char: '3' },
        ParseError::InvalidOperation { op: "*".to_string() },
        ParseError::WordTooLong { word: "A".repeat(20), len: 20, max: cryptarithm::puzzle::MAX_WORD_LEN },
        ParseError::InvalidInput { str: "SEND + MORE MONEY".to_string(), reason: "missing '='".to_string() },
        ParseError::NomError(nom::error::ErrorKind::Char),
    ]
}

fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::ParseFailure(Box::new(ParseError::EmptyEquation)),
        SolverError::TooManyLetters { count: 16 },
        SolverError::VerificationFailed { context: "[A→1, B→2, C→4] does not satisfy A + B = C".to_string() },
    ]
}

fn render_docs() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Solver Errors (S001–S003)](#solver-errors)");
    let _ = writeln!(out, "- [Parse Errors (E001–E007)](#parse-errors)");
    let _ = writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n");

    let _ = writeln!(out, "## Solver Errors\n");
    let _ = writeln!(out, "Top-level errors from `solve_equation` and `check_equation`. `S001` wraps a parse error.\n");
    write_error_docs!(out, all_solver_error_variants());

    let _ = writeln!(out, "## Parse Errors\n");
    let _ = writeln!(out, "Errors that occur when reading an equation such as `SEND + MORE = MONEY`.\n");
    write_error_docs!(out, all_parse_error_variants());

    let _ = writeln!(out, "\n## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```\n{}\n```\n", ParseError::InvalidOperation { op: "*".to_string() }.display_detailed());
    let _ = writeln!(out, "1. Note the error code (e.g., `E004`)");
    let _ = writeln!(out, "2. Look it up in this document for detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested resolution steps");

    out
}

fn main() {
    print!("{}", render_docs());
}
