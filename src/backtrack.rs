//! General cryptarithm solver: letter-major backtracking.
//!
//! Letters are bound one at a time in a most-constrained-first order (leading
//! letters, then the most frequent ones). After every tentative binding the
//! whole equation is re-checked column by column from the right, so a branch
//! dies as soon as any column can no longer balance.
//!
//! The search returns the first assignment it completes. If the ordered pass
//! finds nothing, the search is repeated [`RANDOM_RESTARTS`] times with a
//! shuffled letter order.
//!
//! # Examples
//!
//! ```
//! use cryptarithm::{backtrack, Operation};
//!
//! let solution = backtrack::solve("SEND", "MORE", "MONEY", Operation::Add).unwrap();
//! assert_eq!(solution.word_value("MONEY"), Some(10652));
//! ```

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;

use crate::assignment::Assignment;
use crate::layout::{Layout, Slot};
use crate::letters::{MAX_LETTERS, NUM_DIGITS};
use crate::operation::Operation;

/// Recursion ceiling for one search pass.
pub const MAX_DEPTH: usize = 1000;
/// Extra passes with a shuffled letter order after the ordered pass fails.
pub const RANDOM_RESTARTS: usize = 3;

// Leading letters never reach the trailing 0.
const DIGIT_ORDER: [u8; NUM_DIGITS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

// Carry sets as bitmasks: bit n set means a carry (or borrow) of n is still possible.
const CARRY_ZERO: u8 = 0b01;
const CARRY_ANY: u8 = 0b11;

/// What a row contributes to a column under the current partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Known(u8),
    Unbound(Slot),
}

/// Search context for one `solve` call; mutated in place and rolled back on backtrack.
struct Search<'a> {
    layout: &'a Layout,
    operation: Operation,
    digit_of: [Option<u8>; MAX_LETTERS],
    owner: [Option<Slot>; NUM_DIGITS],
    order: Vec<Slot>,
    depth: usize,
    max_depth: usize,
    nodes: usize,
}

impl<'a> Search<'a> {
    fn new(layout: &'a Layout, operation: Operation, order: Vec<Slot>) -> Self {
        debug_assert!(layout.fits_digits(), "search requires at most {MAX_LETTERS} letters");
        Self {
            layout,
            operation,
            digit_of: [None; MAX_LETTERS],
            owner: [None; NUM_DIGITS],
            order,
            depth: 0,
            max_depth: MAX_DEPTH,
            nodes: 0,
        }
    }

    /// Forget all bindings and search again with a different letter order.
    fn reset(&mut self, order: Vec<Slot>) {
        self.digit_of = [None; MAX_LETTERS];
        self.owner = [None; NUM_DIGITS];
        self.order = order;
        self.depth = 0;
    }

    fn bind(&mut self, slot: Slot, digit: u8) {
        debug_assert!(self.owner[usize::from(digit)].is_none(), "digit {digit} already used");
        self.digit_of[slot] = Some(digit);
        self.owner[usize::from(digit)] = Some(slot);
    }

    fn unbind(&mut self, slot: Slot) {
        if let Some(digit) = self.digit_of[slot].take() {
            self.owner[usize::from(digit)] = None;
        }
    }

    fn cell(&self, row: Option<Slot>) -> Cell {
        match row {
            // shorter word: implicit 0
            None => Cell::Known(0),
            Some(slot) => self.digit_of[slot].map_or(Cell::Unbound(slot), Cell::Known),
        }
    }

    /// Carries that can leave column `col` given the carries that can enter it.
    ///
    /// Returns 0 when no incoming carry lets the column balance. A column with
    /// an unbound operand says nothing about its carry, so it yields `CARRY_ANY`.
    fn column_carries(&self, col: usize, carries_in: u8) -> u8 {
        let [top, bottom, result] = self.layout.column(col);
        let (Cell::Known(top), Cell::Known(bottom)) = (self.cell(top), self.cell(bottom)) else {
            return CARRY_ANY;
        };
        let result = self.cell(result);

        let mut carries_out = 0;
        for carry_in in 0..=1u8 {
            if carries_in & (1 << carry_in) == 0 {
                continue;
            }
            let (digit, carry_out) = self.operation.column_step(top, bottom, carry_in);
            let fits = match result {
                Cell::Known(expected) => expected == digit,
                // forward check: the digit must still be free for the result letter
                Cell::Unbound(slot) => {
                    self.owner[usize::from(digit)].is_none() && !(digit == 0 && self.layout.is_leading(slot))
                }
            };
            if fits {
                carries_out |= 1 << carry_out;
            }
        }
        carries_out
    }

    /// Column-wise validation of the current (possibly partial) assignment.
    /// Exact once every letter is bound.
    fn is_consistent(&self) -> bool {
        let mut carries = CARRY_ZERO;
        for col in 0..self.layout.width() {
            carries = self.column_carries(col, carries);
            if carries == 0 {
                return false;
            }
        }
        carries & CARRY_ZERO != 0
    }

    fn backtrack(&mut self, index: usize) -> bool {
        if self.depth > self.max_depth {
            return false;
        }
        self.depth += 1;
        let found = self.extend(index);
        self.depth -= 1;
        found
    }

    fn extend(&mut self, index: usize) -> bool {
        self.nodes += 1;

        let Some(&slot) = self.order.get(index) else {
            return self.is_consistent();
        };

        if self.digit_of[slot].is_some() {
            return self.backtrack(index + 1);
        }

        let leading = self.layout.is_leading(slot);
        for digit in DIGIT_ORDER {
            if digit == 0 && leading {
                continue;
            }
            if self.owner[usize::from(digit)].is_some() {
                continue;
            }

            self.bind(slot, digit);
            if self.is_consistent() && self.backtrack(index + 1) {
                return true;
            }
            self.unbind(slot);
        }

        false
    }

    fn assignment(&self) -> Assignment {
        self.layout.to_assignment(&self.digit_of)
    }
}

/// Leading letters first, then most frequent first; ties keep first-appearance order.
fn constrained_order(layout: &Layout) -> Vec<Slot> {
    let mut order: Vec<Slot> = (0..layout.num_letters()).collect();
    order.sort_by_key(|&slot| (Reverse(layout.is_leading(slot)), Reverse(layout.frequency(slot))));
    order
}

/// Find any digit assignment satisfying `left <operation> right = result`.
///
/// Returns `None` when the puzzle has no solution, including when it has more
/// than [`MAX_LETTERS`] distinct letters.
#[must_use]
pub fn solve(left: &str, right: &str, result: &str, operation: Operation) -> Option<Assignment> {
    solve_with_rng(left, right, result, operation, &mut SmallRng::from_entropy())
}

/// Like [`solve`], drawing the shuffled retry orders from `rng`.
pub fn solve_with_rng<R: Rng + ?Sized>(
    left: &str,
    right: &str,
    result: &str,
    operation: Operation,
    rng: &mut R,
) -> Option<Assignment> {
    let layout = Layout::new(left, right, result);
    if !layout.fits_digits() {
        debug!(
            "{left} {operation} {right} = {result}: {} letters cannot map onto {NUM_DIGITS} digits",
            layout.num_letters()
        );
        return None;
    }

    let mut search = Search::new(&layout, operation, constrained_order(&layout));
    if search.backtrack(0) {
        debug!("{left} {operation} {right} = {result}: solved after {} nodes", search.nodes);
        return Some(search.assignment());
    }

    for attempt in 1..=RANDOM_RESTARTS {
        let mut order: Vec<Slot> = (0..layout.num_letters()).collect();
        order.shuffle(rng);
        debug!("{left} {operation} {right} = {result}: retry {attempt}/{RANDOM_RESTARTS} with order {order:?}");
        search.reset(order);
        if search.backtrack(0) {
            return Some(search.assignment());
        }
    }

    debug!("{left} {operation} {right} = {result}: no solution after {} nodes", search.nodes);
    None
}
