use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::letters::NUM_DIGITS;

/// `Assignment` maps a puzzle letter to the digit it stands for.
///
/// Letters are opaque symbols; nothing here depends on them being A-Z.
/// Iteration and display are in letter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    digits: BTreeMap<char, u8>,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(k, v)| format!("{k}→{v}")).collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

impl FromIterator<(char, u8)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, u8)>>(iter: I) -> Self {
        Self { digits: iter.into_iter().collect() }
    }
}

impl Assignment {
    /// Digit bound to `letter`, if any
    #[must_use]
    pub fn get(&self, letter: char) -> Option<u8> {
        self.digits.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Iterate over `(letter, digit)` pairs in letter order
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.digits.iter().map(|(&c, &d)| (c, d))
    }

    #[must_use]
    pub fn contains_all_letters(&self, letters: &[char]) -> bool {
        letters.iter().all(|c| self.digits.contains_key(c))
    }

    /// Every digit is in 0-9 and no two letters share one.
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let mut used = [false; NUM_DIGITS];
        self.digits
            .values()
            .all(|&d| usize::from(d) < NUM_DIGITS && !std::mem::replace(&mut used[usize::from(d)], true))
    }

    /// Numeric value of `word` under this assignment.
    ///
    /// Returns `None` if a letter of `word` is unbound or the value overflows a `u64`.
    #[must_use]
    pub fn word_value(&self, word: &str) -> Option<u64> {
        word.chars().try_fold(0u64, |acc, c| {
            acc.checked_mul(10)?.checked_add(u64::from(self.get(c)?))
        })
    }

    /// The digits of `word` under this assignment, one per letter (leading zeros kept).
    #[must_use]
    pub fn spell(&self, word: &str) -> Option<Vec<u8>> {
        word.chars().map(|c| self.get(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_more_money() -> Assignment {
        [('O', 0), ('M', 1), ('Y', 2), ('E', 5), ('N', 6), ('D', 7), ('R', 8), ('S', 9)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_assignment_get() {
        let a: Assignment = [('A', 3)].into_iter().collect();

        assert_eq!(a.get('A'), Some(3));
        assert_eq!(a.get('B'), None);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_assignment_iter_is_sorted() {
        let a = send_more_money();
        let letters: Vec<char> = a.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['D', 'E', 'M', 'N', 'O', 'R', 'S', 'Y']);
    }

    #[test]
    fn test_assignment_display() {
        let a: Assignment = [('B', 2), ('A', 1)].into_iter().collect();
        assert_eq!(a.to_string(), "[A→1, B→2]");
        assert_eq!(Assignment::default().to_string(), "[]");
    }

    #[test]
    fn test_word_value() {
        let a = send_more_money();
        assert_eq!(a.word_value("SEND"), Some(9567));
        assert_eq!(a.word_value("MORE"), Some(1085));
        assert_eq!(a.word_value("MONEY"), Some(10652));
        assert_eq!(a.word_value("OR"), Some(8));
        assert_eq!(a.word_value("SAND"), None);
    }

    #[test]
    fn test_word_value_overflow() {
        let a: Assignment = [('A', 9)].into_iter().collect();
        assert_eq!(a.word_value(&"A".repeat(19)), Some(9_999_999_999_999_999_999));
        assert_eq!(a.word_value(&"A".repeat(20)), None);
    }

    #[test]
    fn test_spell_keeps_leading_zero() {
        let a = send_more_money();
        assert_eq!(a.spell("OR"), Some(vec![0, 8]));
        assert_eq!(a.spell("OX"), None);
    }

    #[test]
    fn test_is_injective() {
        assert!(send_more_money().is_injective());
        let dup: Assignment = [('A', 1), ('B', 1)].into_iter().collect();
        assert!(!dup.is_injective());
        assert!(Assignment::default().is_injective());
        let out_of_range: Assignment = [('A', 10)].into_iter().collect();
        assert!(!out_of_range.is_injective());
    }

    #[test]
    fn test_contains_all_letters() {
        let a = send_more_money();
        assert!(a.contains_all_letters(&['S', 'E', 'N', 'D']));
        assert!(a.contains_all_letters(&[]));
        assert!(!a.contains_all_letters(&['S', 'X']));
    }

    #[test]
    fn test_assignment_equality_ignores_insert_order() {
        let a1: Assignment = [('A', 1), ('B', 2)].into_iter().collect();
        let a2: Assignment = [('B', 2), ('A', 1)].into_iter().collect();
        assert_eq!(a1, a2);
    }
}
