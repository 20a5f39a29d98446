//! Events that drive the calculator

use super::state::Operation;

/// A single digit or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(char);

impl Digit {
    /// Accepts `'0'..='9'` and `'.'`
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AppendDigit(Digit),
    DeleteLastDigit,
    ChooseOperation(Operation),
    Compute,
    /// `%` key: divides the entry by 100 unless an operand is pending
    InlinePercentage,
    Clear,
}
