//! Calculator state types

use serde::Serialize;

/// Placeholder shown when nothing has been entered
pub const ZERO_ENTRY: &str = "0";

/// Binary operation waiting for its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `prev * (current / 100)`; only reachable through a pending operand
    Percentage,
}

impl Operation {
    /// Glyph shown after the pending operand on the secondary display line
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "\u{2212}",
            Operation::Multiply => "\u{d7}",
            Operation::Divide => "\u{f7}",
            Operation::Percentage => "%",
        }
    }
}

/// The whole interaction state of the calculator.
///
/// `current_entry` is never empty and holds at most one decimal point.
/// An empty `pending_operand` means no operand is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcState {
    pub current_entry: String,
    pub pending_operand: String,
    pub pending_operation: Option<Operation>,
    /// Next digit starts a fresh number instead of extending the entry
    pub reset_on_next_digit: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            current_entry: ZERO_ENTRY.to_string(),
            pending_operand: String::new(),
            pending_operation: None,
            reset_on_next_digit: false,
        }
    }
}

impl CalcState {
    pub fn has_pending_operand(&self) -> bool {
        !self.pending_operand.is_empty()
    }
}
