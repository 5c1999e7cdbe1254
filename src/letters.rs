use std::collections::HashSet;
use std::ops::RangeInclusive;

// Digit-domain constants
/// Most distinct letters a cryptarithm can have: one per decimal digit.
pub const MAX_LETTERS: usize = 10;
pub(crate) const NUM_DIGITS: usize = 10;
pub(crate) const DIGIT_RANGE: RangeInclusive<u8> = 0..=9;

pub(crate) trait PuzzleChar {
    fn is_puzzle_letter(&self) -> bool;
}

impl PuzzleChar for char {
    fn is_puzzle_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}

/// Distinct letters of `words`, in order of first appearance.
#[must_use]
pub fn unique_letters(words: &[&str]) -> Vec<char> {
    let mut seen = HashSet::new();
    words
        .iter()
        .flat_map(|w| w.chars())
        .filter(|&c| seen.insert(c))
        .collect()
}

/// Distinct first letters of the non-empty words in `words`.
/// None of these may stand for 0.
#[must_use]
pub fn leading_letters(words: &[&str]) -> Vec<char> {
    let mut leading: Vec<char> = Vec::with_capacity(words.len());
    for c in words.iter().filter_map(|w| w.chars().next()) {
        if !leading.contains(&c) {
            leading.push(c);
        }
    }
    leading
}

/// True when the distinct letters of `words` can be mapped injectively onto digits.
#[must_use]
pub fn fits_in_digits(words: &[&str]) -> bool {
    unique_letters(words).len() <= MAX_LETTERS
}
