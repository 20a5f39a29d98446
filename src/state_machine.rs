//! Core calculator state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! `transition` takes the current state and an event and returns the next
//! state plus the effects the runtime has to carry out.

mod display;
mod effect;
mod error;
pub mod event;
mod number;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use display::Display;
pub use effect::Effect;
pub use error::CalcError;
pub use event::{Digit, Event};
pub use state::{CalcState, Operation};
pub use transition::transition;
