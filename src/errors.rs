//! Error types for reading puzzles, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E007) for documentation lookup:
//!
//! - E001: `ParseFailure` (Generic parse failure)
//! - E002: `EmptyEquation` (Empty equation string)
//! - E003: `InvalidWord` (Word contains a non-letter)
//! - E004: `InvalidOperation` (Operator is not `+` or `-`)
//! - E005: `WordTooLong` (Word has more digits than fit in a `u64`)
//! - E006: `InvalidInput` (Input does not have the `WORD op WORD = WORD` shape)
//! - E007: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use cryptarithm::errors::ParseError;
//!
//! match "SEND * MORE = MONEY".parse::<cryptarithm::Puzzle>() {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(puzzle) => println!("Parsed {puzzle}"),
//! }
//! # let _ = ParseError::EmptyEquation;
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;

/// Custom error type for puzzle parsing and validation
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Equation parsing failed: \"{s}\"")]
    ParseFailure { s: String },

    #[error("Empty equation string")]
    EmptyEquation,

    #[error("Invalid character '{invalid_char}' in word \"{word}\" (only letters A-Z allowed)")]
    InvalidWord { word: String, invalid_char: char },

    #[error("Invalid operation '{op}' (expected '+' or '-')")]
    InvalidOperation { op: String },

    #[error("Word \"{word}\" is too long ({len} letters, max {max})")]
    WordTooLong { word: String, len: usize, max: usize },

    #[error("Invalid input: \"{str}\" ({reason})")]
    InvalidInput { str: String, reason: String },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "E001",
            ParseError::EmptyEquation => "E002",
            ParseError::InvalidWord { .. } => "E003",
            ParseError::InvalidOperation { .. } => "E004",
            ParseError::WordTooLong { .. } => "E005",
            ParseError::InvalidInput { .. } => "E006",
            ParseError::NomError(_) => "E007",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "Generic parse failure",
            ParseError::EmptyEquation => "Empty equation string",
            ParseError::InvalidWord { .. } => "Word contains a non-letter",
            ParseError::InvalidOperation { .. } => "Unsupported operator",
            ParseError::WordTooLong { .. } => "Word too long to evaluate",
            ParseError::InvalidInput { .. } => "Malformed equation",
            ParseError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "The input could not be read as a cryptarithm. This is the fallback for failures without a more specific code.",
            ParseError::EmptyEquation => "The equation string was empty or contained only whitespace.",
            ParseError::InvalidWord { .. } => "Every word of a cryptarithm is spelled with letters only; each distinct letter stands for one digit.",
            ParseError::InvalidOperation { .. } => "Only addition and subtraction cryptarithms are supported.",
            ParseError::WordTooLong { .. } => "Word values are evaluated as 64-bit unsigned integers, which limits words to 18 letters.",
            ParseError::InvalidInput { .. } => "The equation must have the shape `WORD op WORD = WORD`, for example `SEND + MORE = MONEY`.",
            ParseError::NomError(_) => "The underlying nom parser rejected the input. This usually accompanies a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyEquation => Some("Example: 'SEND + MORE = MONEY'"),
            ParseError::InvalidWord { .. } => Some("Remove digits, punctuation and accents from the words"),
            ParseError::InvalidOperation { .. } => Some("Use '+' for addition or '-' for subtraction (e.g., 'COUNT - COIN = SNUB')"),
            ParseError::WordTooLong { .. } => Some("Use words of at most 18 letters"),
            ParseError::InvalidInput { .. } => Some("Expected format: WORD + WORD = WORD or WORD - WORD = WORD"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ParseError> {
        vec![
            ParseError::ParseFailure { s: "test".to_string() },
            ParseError::EmptyEquation,
            ParseError::InvalidWord { word: "S3ND".to_string(), invalid_char: '3' },
            ParseError::InvalidOperation { op: "*".to_string() },
            ParseError::WordTooLong { word: "A".repeat(20), len: 20, max: 18 },
            ParseError::InvalidInput { str: "SEND".to_string(), reason: "missing '='".to_string() },
            ParseError::NomError(ErrorKind::Alpha),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::EmptyEquation;
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `ParseError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with('E'), "Error code '{}' should start with 'E'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert_eq!(codes.len(), 7);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_invalid_word_message_names_char_and_word() {
        let err = ParseError::InvalidWord { word: "S3ND".to_string(), invalid_char: '3' };
        let detailed = err.display_detailed();

        assert!(detailed.contains("'3'"));
        assert!(detailed.contains("S3ND"));
        assert!(detailed.contains("E003"));
    }

    #[test]
    fn test_display_without_help_has_code_only() {
        let err = ParseError::NomError(ErrorKind::Char);
        assert_eq!(err.display_detailed(), format!("{err} (E007)"));
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = ParseError::EmptyEquation.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("Empty equation"));
    }
}
