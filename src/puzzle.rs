use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, multispace0},
    sequence::delimited,
    IResult,
    Parser,
};
use std::fmt;
use std::str::FromStr;

use crate::assignment::Assignment;
use crate::backtrack;
use crate::errors::ParseError;
use crate::letters::{fits_in_digits, leading_letters, unique_letters, PuzzleChar};
use crate::operation::Operation;
use crate::unique;

/// Longest word whose value always fits in a `u64`.
pub const MAX_WORD_LEN: usize = 18;

/// Parser result type: input, output, with our custom `ParseError`
type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

/// A cryptarithm `LEFT op RIGHT = RESULT` over uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    left: String,
    right: String,
    result: String,
    operation: Operation,
}

/// Check that `raw` is a usable word and return it uppercased.
fn normalize_word(raw: &str) -> Result<String, Box<ParseError>> {
    if raw.is_empty() {
        return Err(Box::new(ParseError::InvalidInput {
            str: raw.to_string(),
            reason: "empty word".to_string(),
        }));
    }
    if let Some(invalid_char) = raw.chars().find(|c| !c.is_puzzle_letter()) {
        return Err(Box::new(ParseError::InvalidWord { word: raw.to_string(), invalid_char }));
    }
    let len = raw.chars().count();
    if len > MAX_WORD_LEN {
        return Err(Box::new(ParseError::WordTooLong { word: raw.to_string(), len, max: MAX_WORD_LEN }));
    }
    Ok(raw.to_ascii_uppercase())
}

impl Puzzle {
    /// Build a puzzle from its three words, validating and uppercasing them.
    pub fn new(left: &str, right: &str, result: &str, operation: Operation) -> Result<Self, Box<ParseError>> {
        Ok(Puzzle {
            left: normalize_word(left)?,
            right: normalize_word(right)?,
            result: normalize_word(result)?,
            operation,
        })
    }

    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// `[left, right, result]`
    #[must_use]
    pub fn words(&self) -> [&str; 3] {
        [&self.left, &self.right, &self.result]
    }

    /// Distinct letters, in order of first appearance.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        unique_letters(&self.words())
    }

    #[must_use]
    pub fn leading_letters(&self) -> Vec<char> {
        leading_letters(&self.words())
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters().len()
    }

    #[must_use]
    pub fn fits_in_digits(&self) -> bool {
        fits_in_digits(&self.words())
    }

    /// Any solution (see [`backtrack::solve`]).
    #[must_use]
    pub fn solve(&self) -> Option<Assignment> {
        backtrack::solve(&self.left, &self.right, &self.result, self.operation)
    }

    /// Up to `max` solutions (see [`unique::solve_unique`]).
    #[must_use]
    pub fn solutions(&self, max: usize) -> Vec<Assignment> {
        unique::solve_unique(&self.left, &self.right, &self.result, self.operation, max)
    }

    #[must_use]
    pub fn has_unique_solution(&self) -> bool {
        unique::has_unique_solution(&self.left, &self.right, &self.result, self.operation)
    }

    #[must_use]
    pub fn unique_solution(&self) -> Option<Assignment> {
        unique::get_unique_solution(&self.left, &self.right, &self.result, self.operation)
    }

    /// Full check of a candidate answer: every letter bound, injective, no
    /// leading zero, and the arithmetic holds.
    #[must_use]
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        if !assignment.contains_all_letters(&self.letters()) || !assignment.is_injective() {
            return false;
        }
        if self.leading_letters().into_iter().any(|c| assignment.get(c) == Some(0)) {
            return false;
        }
        match (
            assignment.word_value(&self.left),
            assignment.word_value(&self.right),
            assignment.word_value(&self.result),
        ) {
            (Some(l), Some(r), Some(res)) => self.operation.apply(l, r) == Some(res),
            _ => false,
        }
    }

    /// The equation with every letter replaced by its digit, e.g. `9567 + 1085 = 10652`.
    /// `None` if some letter is unbound.
    #[must_use]
    pub fn substitute(&self, assignment: &Assignment) -> Option<String> {
        let spelled = |word: &str| -> Option<String> {
            Some(assignment.spell(word)?.into_iter().map(|d| char::from(b'0' + d)).collect())
        };
        Some(format!(
            "{} {} {} = {}",
            spelled(&self.left)?,
            self.operation,
            spelled(&self.right)?,
            spelled(&self.result)?
        ))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.operation, self.right, self.result)
    }
}

impl FromStr for Puzzle {
    type Err = Box<ParseError>;

    /// Parse `WORD op WORD = WORD`; whitespace is optional and letters may be lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Box::new(ParseError::EmptyEquation));
        }

        match equation(s) {
            Ok(("", (left, operation, right, result))) => Puzzle::new(left, right, result, operation),
            Ok((rest, _)) => Err(Box::new(ParseError::InvalidInput {
                str: rest.to_string(),
                reason: "unexpected text after the result word".to_string(),
            })),
            // bubble up the specific ParseError
            Err(nom::Err::Failure(e)) => Err(e),
            Err(_) => Err(diagnose(s)),
        }
    }
}

/// Best-effort explanation for input the grammar rejected outright.
fn diagnose(s: &str) -> Box<ParseError> {
    let reason = if !s.contains('=') {
        "missing '='"
    } else if s.matches('=').count() > 1 {
        "more than one '='"
    } else {
        return Box::new(ParseError::ParseFailure { s: s.to_string() });
    };
    Box::new(ParseError::InvalidInput { str: s.to_string(), reason: reason.to_string() })
}

// === Token parsers ===

fn word(input: &str) -> PResult<'_, &str> {
    delimited(multispace0, take_while1(char::is_alphanumeric), multispace0).parse(input)
}

fn operation(input: &str) -> PResult<'_, Operation> {
    let (rest, symbol) = take_till1(|c: char| c.is_whitespace() || c.is_alphanumeric()).parse(input)?;
    let op = symbol.parse::<Operation>().map_err(|e| nom::Err::Failure(Box::new(e)))?;
    Ok((rest, op))
}

fn equation(input: &str) -> PResult<'_, (&str, Operation, &str, &str)> {
    let (input, left) = word(input)?;
    let (input, op) = operation(input)?;
    let (input, right) = word(input)?;
    let (input, _) = char('=').parse(input)?;
    let (input, result) = word(input)?;
    Ok((input, (left, op, right, result)))
}
