use crate::errors::ParseError;
use std::fmt;
use std::str::FromStr;

/// Arithmetic operator of a cryptarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
}

impl Operation {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
        }
    }

    /// Apply the operator to whole numbers; `None` on overflow or a negative difference.
    #[must_use]
    pub fn apply(self, a: u64, b: u64) -> Option<u64> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Sub => a.checked_sub(b),
        }
    }

    /// One column of schoolbook arithmetic: `(digit, carry_out)` for addition,
    /// `(digit, borrow_out)` for subtraction.
    pub(crate) fn column_step(self, top: u8, bottom: u8, carry_in: u8) -> (u8, u8) {
        debug_assert!(top <= 9 && bottom <= 9 && carry_in <= 1);
        match self {
            Operation::Add => {
                let sum = top + bottom + carry_in;
                (sum % 10, sum / 10)
            }
            Operation::Sub => {
                let diff = i16::from(top) - i16::from(bottom) - i16::from(carry_in);
                if diff < 0 {
                    // diff is in -10..0 here, so diff + 10 fits in a digit
                    ((diff + 10) as u8, 1)
                } else {
                    (diff as u8, 0)
                }
            }
        }
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            // U+2212 is what the practice UI renders
            "-" | "\u{2212}" => Ok(Operation::Sub),
            _ => Err(ParseError::InvalidOperation { op: s.to_string() }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
