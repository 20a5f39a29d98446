//! Runtime for driving the calculator
//!
//! Owns the single `CalcState`, feeds events through the pure transition
//! function and executes the resulting effects.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::Calculator;
pub use traits::*;
