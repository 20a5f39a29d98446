//! Two-line display formatting

use super::state::CalcState;
use serde::Serialize;

/// What the calculator shows: the pending operand and operator above the
/// current entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Display {
    pub primary: String,
    pub secondary: String,
}

impl Display {
    pub fn from_state(state: &CalcState) -> Self {
        let secondary = match state.pending_operation {
            Some(op) => format!("{} {}", state.pending_operand, op.symbol()),
            None => state.pending_operand.clone(),
        };
        Self {
            primary: state.current_entry.clone(),
            secondary,
        }
    }
}

impl From<&CalcState> for Display {
    fn from(state: &CalcState) -> Self {
        Self::from_state(state)
    }
}
