//! Column layout shared by both solvers.
//!
//! A puzzle is compiled once per solve: every distinct letter gets a slot index
//! (first-appearance order), and each column (0 = rightmost) records which slot
//! sits in each of the three rows. A row with no character in a column is
//! `None` and counts as digit 0.

use std::collections::HashMap;

use crate::assignment::Assignment;
use crate::letters::MAX_LETTERS;

/// Index of a letter within a `Layout`.
pub(crate) type Slot = usize;

/// The three rows of one column: left operand, right operand, result.
pub(crate) type Column = [Option<Slot>; 3];

#[derive(Debug, Clone)]
pub(crate) struct Layout {
    letters: Vec<char>,
    leading: Vec<bool>,
    frequency: Vec<usize>,
    columns: Vec<Column>,
}

impl Layout {
    pub(crate) fn new(left: &str, right: &str, result: &str) -> Self {
        let mut letters = Vec::new();
        let mut leading = Vec::new();
        let mut frequency = Vec::new();
        let mut index: HashMap<char, Slot> = HashMap::new();

        let rows: Vec<Vec<Slot>> = [left, right, result]
            .iter()
            .map(|word| {
                word.chars()
                    .enumerate()
                    .map(|(pos, c)| {
                        let slot = *index.entry(c).or_insert_with(|| {
                            letters.push(c);
                            leading.push(false);
                            frequency.push(0);
                            letters.len() - 1
                        });
                        frequency[slot] += 1;
                        if pos == 0 {
                            leading[slot] = true;
                        }
                        slot
                    })
                    .collect()
            })
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = (0..width)
            .map(|col| {
                let cell = |row: &Vec<Slot>| row.len().checked_sub(col + 1).map(|i| row[i]);
                [cell(&rows[0]), cell(&rows[1]), cell(&rows[2])]
            })
            .collect();

        Layout { letters, leading, frequency, columns }
    }

    pub(crate) fn num_letters(&self) -> usize {
        self.letters.len()
    }

    /// At most one letter per digit.
    pub(crate) fn fits_digits(&self) -> bool {
        self.num_letters() <= MAX_LETTERS
    }

    pub(crate) fn is_leading(&self, slot: Slot) -> bool {
        self.leading[slot]
    }

    pub(crate) fn frequency(&self, slot: Slot) -> usize {
        self.frequency[slot]
    }

    /// Number of columns (length of the longest word).
    pub(crate) fn width(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn column(&self, col: usize) -> Column {
        self.columns[col]
    }

    /// Materialize slot digits into an `Assignment`; unbound slots are left out.
    pub(crate) fn to_assignment(&self, digits: &[Option<u8>]) -> Assignment {
        self.letters
            .iter()
            .zip(digits)
            .filter_map(|(&c, d)| d.map(|d| (c, d)))
            .collect()
    }
}
