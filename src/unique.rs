//! Uniqueness solver: column-major enumeration of assignments.
//!
//! Columns are processed from the rightmost one, branching only over the
//! letters that first show up in the current column. Every column is checked
//! as soon as its letters are bound, so the search enumerates solutions in a
//! fixed order and stops once `max_solutions` have been found. Asking for two
//! solutions is enough to tell a unique puzzle from an ambiguous one.

use log::debug;

use crate::assignment::Assignment;
use crate::layout::{Layout, Slot};
use crate::letters::{DIGIT_RANGE, MAX_LETTERS, NUM_DIGITS};
use crate::operation::Operation;

/// Solutions collected by [`has_unique_solution`] and [`get_unique_solution`].
pub const DEFAULT_MAX_SOLUTIONS: usize = 2;

struct UniqueSearch<'a> {
    layout: &'a Layout,
    operation: Operation,
    digit_of: [Option<u8>; MAX_LETTERS],
    used: [bool; NUM_DIGITS],
    solutions: Vec<Assignment>,
    max_solutions: usize,
}

impl<'a> UniqueSearch<'a> {
    fn new(layout: &'a Layout, operation: Operation, max_solutions: usize) -> Self {
        Self {
            layout,
            operation,
            digit_of: [None; MAX_LETTERS],
            used: [false; NUM_DIGITS],
            solutions: Vec::new(),
            max_solutions,
        }
    }

    fn is_full(&self) -> bool {
        self.solutions.len() >= self.max_solutions
    }

    /// Enter column `col` with an incoming carry (or borrow).
    fn column(&mut self, col: usize, carry: u8) {
        if self.is_full() {
            return;
        }

        if col == self.layout.width() {
            if carry == 0 {
                self.solutions.push(self.layout.to_assignment(&self.digit_of));
            }
            return;
        }

        let mut pending: Vec<Slot> = Vec::with_capacity(3);
        for slot in self.layout.column(col).into_iter().flatten() {
            if self.digit_of[slot].is_none() && !pending.contains(&slot) {
                pending.push(slot);
            }
        }

        self.assign_pending(col, carry, &pending);
    }

    fn assign_pending(&mut self, col: usize, carry: u8, pending: &[Slot]) {
        let Some((&slot, rest)) = pending.split_first() else {
            if let Some(carry_out) = self.check_column(col, carry) {
                self.column(col + 1, carry_out);
            }
            return;
        };

        let leading = self.layout.is_leading(slot);
        for digit in DIGIT_RANGE {
            if self.is_full() {
                return;
            }
            if (digit == 0 && leading) || self.used[usize::from(digit)] {
                continue;
            }

            self.digit_of[slot] = Some(digit);
            self.used[usize::from(digit)] = true;
            self.assign_pending(col, carry, rest);
            self.used[usize::from(digit)] = false;
            self.digit_of[slot] = None;
        }
    }

    /// Outgoing carry when column `col` balances, `None` otherwise.
    /// Every letter of the column is bound by now; an empty cell is 0.
    fn check_column(&self, col: usize, carry: u8) -> Option<u8> {
        let value = |row: Option<Slot>| row.and_then(|slot| self.digit_of[slot]).unwrap_or(0);
        let [top, bottom, result] = self.layout.column(col);
        let (digit, carry_out) = self.operation.column_step(value(top), value(bottom), carry);
        (digit == value(result)).then_some(carry_out)
    }
}

fn enumerate(left: &str, right: &str, result: &str, operation: Operation, max_solutions: usize) -> Vec<Assignment> {
    if max_solutions == 0 {
        return Vec::new();
    }

    let layout = Layout::new(left, right, result);
    if !layout.fits_digits() {
        debug!(
            "{left} {operation} {right} = {result}: {} letters, nothing to enumerate",
            layout.num_letters()
        );
        return Vec::new();
    }

    let mut search = UniqueSearch::new(&layout, operation, max_solutions);
    search.column(0, 0);
    debug!(
        "{left} {operation} {right} = {result}: {} solution(s) (cap {max_solutions})",
        search.solutions.len()
    );
    search.solutions
}

/// Up to `max_solutions` assignments satisfying `a + b = c`.
#[must_use]
pub fn solve_add_unique(a: &str, b: &str, c: &str, max_solutions: usize) -> Vec<Assignment> {
    enumerate(a, b, c, Operation::Add, max_solutions)
}

/// Up to `max_solutions` assignments satisfying `minuend - subtrahend = difference`.
#[must_use]
pub fn solve_sub_unique(minuend: &str, subtrahend: &str, difference: &str, max_solutions: usize) -> Vec<Assignment> {
    enumerate(minuend, subtrahend, difference, Operation::Sub, max_solutions)
}

/// Dispatch to [`solve_add_unique`] or [`solve_sub_unique`].
#[must_use]
pub fn solve_unique(
    left: &str,
    right: &str,
    result: &str,
    operation: Operation,
    max_solutions: usize,
) -> Vec<Assignment> {
    match operation {
        Operation::Add => solve_add_unique(left, right, result, max_solutions),
        Operation::Sub => solve_sub_unique(left, right, result, max_solutions),
    }
}

/// True iff the puzzle has exactly one solution.
#[must_use]
pub fn has_unique_solution(left: &str, right: &str, result: &str, operation: Operation) -> bool {
    solve_unique(left, right, result, operation, DEFAULT_MAX_SOLUTIONS).len() == 1
}

/// The solution, when there is exactly one.
#[must_use]
pub fn get_unique_solution(left: &str, right: &str, result: &str, operation: Operation) -> Option<Assignment> {
    let mut solutions = solve_unique(left, right, result, operation, DEFAULT_MAX_SOLUTIONS);
    if solutions.len() == 1 {
        solutions.pop()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack;

    fn satisfies(left: &str, right: &str, result: &str, operation: Operation, a: &Assignment) -> bool {
        let leading_ok = [left, right, result]
            .iter()
            .filter_map(|w| w.chars().next())
            .all(|c| a.get(c) != Some(0));
        match (a.word_value(left), a.word_value(right), a.word_value(result)) {
            (Some(l), Some(r), Some(res)) => a.is_injective() && leading_ok && operation.apply(l, r) == Some(res),
            _ => false,
        }
    }

    #[test]
    fn test_send_more_money_is_unique() {
        let solutions = solve_add_unique("SEND", "MORE", "MONEY", 10);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].to_string(), "[D→7, E→5, M→1, N→6, O→0, R→8, S→9, Y→2]");
        assert!(has_unique_solution("SEND", "MORE", "MONEY", Operation::Add));
    }

    #[test]
    fn test_ambiguous_stops_at_cap() {
        let solutions = solve_add_unique("A", "B", "C", DEFAULT_MAX_SOLUTIONS);
        assert_eq!(solutions.len(), 2);
        assert_ne!(solutions[0], solutions[1]);
        for a in &solutions {
            assert!(satisfies("A", "B", "C", Operation::Add, a));
        }
        assert!(!has_unique_solution("A", "B", "C", Operation::Add));
        assert_eq!(get_unique_solution("A", "B", "C", Operation::Add), None);
    }

    #[test]
    fn test_enumerates_every_solution_under_a_large_cap() {
        // ordered pairs of distinct nonzero digits with a one-digit sum
        assert_eq!(solve_add_unique("A", "B", "C", 100).len(), 32);
    }

    #[test]
    fn test_zero_cap_returns_nothing() {
        assert!(solve_add_unique("SEND", "MORE", "MONEY", 0).is_empty());
    }

    #[test]
    fn test_unsolvable() {
        assert!(solve_add_unique("ABC", "ABC", "AB", 2).is_empty());
        assert!(!has_unique_solution("ABC", "ABC", "AB", Operation::Add));
    }

    #[test]
    fn test_subtraction() {
        let solution = get_unique_solution("COUNT", "COIN", "SNUB", Operation::Sub).unwrap();
        assert_eq!(solution.word_value("COUNT"), Some(10652));
        assert_eq!(solution.word_value("SNUB"), Some(9567));

        let solutions = solve_sub_unique("NINE", "TEN", "TWO", 10);
        assert_eq!(solutions.len(), 4);
        assert!(solutions.iter().all(|a| satisfies("NINE", "TEN", "TWO", Operation::Sub, a)));
    }

    #[test]
    fn test_subtraction_result_longer_than_minuend() {
        assert!(solve_sub_unique("AB", "C", "DEF", 2).is_empty());
    }

    #[test]
    fn test_unequal_lengths() {
        let solution = get_unique_solution("TO", "GO", "OUT", Operation::Add).unwrap();
        assert_eq!(solution.word_value("OUT"), Some(102));
        assert!(has_unique_solution("EAT", "THAT", "APPLE", Operation::Add));
    }

    #[test]
    fn test_too_many_letters() {
        assert!(solve_add_unique("ABCDEF", "GHIJK", "LMNOP", 2).is_empty());
        assert!(!has_unique_solution("ABCDEF", "GHIJK", "LMNOP", Operation::Add));
    }

    #[test]
    fn test_raising_cap_keeps_unique_count() {
        for (l, r, res, op) in [
            ("SEND", "MORE", "MONEY", Operation::Add),
            ("TO", "GO", "OUT", Operation::Add),
            ("COUNT", "COIN", "SNUB", Operation::Sub),
        ] {
            assert_eq!(solve_unique(l, r, res, op, 2).len(), 1);
            assert_eq!(solve_unique(l, r, res, op, 50).len(), 1);
        }
    }

    #[test]
    fn test_get_unique_agrees_with_has_unique() {
        for (l, r, res, op) in [
            ("SEND", "MORE", "MONEY", Operation::Add),
            ("A", "B", "C", Operation::Add),
            ("ABC", "ABC", "AB", Operation::Add),
            ("NINE", "TEN", "TWO", Operation::Sub),
            ("AB", "BA", "AC", Operation::Sub),
        ] {
            assert_eq!(
                get_unique_solution(l, r, res, op).is_some(),
                has_unique_solution(l, r, res, op),
                "{l} {op} {r} = {res}"
            );
        }
    }

    #[test]
    fn test_agrees_with_backtracking_solver() {
        for (l, r, res, op) in [
            ("SEND", "MORE", "MONEY", Operation::Add),
            ("A", "B", "C", Operation::Add),
            ("ABC", "ABC", "AB", Operation::Add),
            ("TO", "GO", "OUT", Operation::Add),
            ("COUNT", "COIN", "SNUB", Operation::Sub),
            ("SEVEN", "NINE", "FOUR", Operation::Sub),
            ("FORTY", "TEN", "SIXTY", Operation::Sub),
            ("ABC", "AB", "AB", Operation::Sub),
        ] {
            let any = backtrack::solve(l, r, res, op);
            let some = solve_unique(l, r, res, op, 1);
            assert_eq!(any.is_some(), !some.is_empty(), "{l} {op} {r} = {res}");
            if let Some(a) = any {
                assert!(satisfies(l, r, res, op, &a));
            }
        }
    }
}
