//! Calculator error conditions

use thiserror::Error;

/// Conditions reported to the user through `Effect::Notify`.
///
/// These never surface as `Err`: the transition recovers and the runtime
/// only has to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivideByZero,
}
