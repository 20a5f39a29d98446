//! Effects produced by state transitions

use super::error::CalcError;

/// Effects to be executed after state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Tell the user something went wrong (the state has already recovered)
    Notify(CalcError),
}

impl Effect {
    pub fn divide_by_zero() -> Self {
        Effect::Notify(CalcError::DivideByZero)
    }
}
