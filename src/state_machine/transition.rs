//! Pure state transition function
//!
//! Every malformed input (unparseable operands, a second decimal point, no
//! pending operation) is a silent no-op. Division by zero resets the
//! calculator and emits a notice.

use super::number::{format_number, parse_operand, round8};
use super::state::ZERO_ENTRY;
use super::{CalcState, Digit, Effect, Event, Operation};

/// Result of a state transition
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    pub new_state: CalcState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: CalcState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    /// The state as it was, no effects
    pub fn unchanged(state: &CalcState) -> Self {
        Self::new(state.clone())
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[allow(dead_code)] // API completeness
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Pure transition function
///
/// Given the same state and event it always produces the same result and
/// performs no I/O. Effects are left to the runtime.
pub fn transition(state: &CalcState, event: Event) -> TransitionResult {
    match event {
        Event::AppendDigit(digit) => append_digit(state, digit),
        Event::DeleteLastDigit => delete_last_digit(state),
        Event::ChooseOperation(op) => choose_operation(state, op),
        Event::Compute => compute(state),
        Event::InlinePercentage => inline_percentage(state),
        Event::Clear => TransitionResult::new(CalcState::default()),
    }
}

fn append_digit(state: &CalcState, digit: Digit) -> TransitionResult {
    let mut next = state.clone();

    if next.current_entry == ZERO_ENTRY || next.reset_on_next_digit {
        next.current_entry = digit.as_char().to_string();
        next.reset_on_next_digit = false;
    } else if digit.is_point() && next.current_entry.contains('.') {
        return TransitionResult::unchanged(state);
    } else {
        next.current_entry.push(digit.as_char());
    }

    TransitionResult::new(next)
}

fn delete_last_digit(state: &CalcState) -> TransitionResult {
    let mut next = state.clone();

    if next.current_entry.chars().count() <= 1 {
        next.current_entry = ZERO_ENTRY.to_string();
    } else {
        next.current_entry.pop();
        // a lone sign left over from a negative result
        if next.current_entry == "-" {
            next.current_entry = ZERO_ENTRY.to_string();
        }
    }

    TransitionResult::new(next)
}

fn choose_operation(state: &CalcState, op: Operation) -> TransitionResult {
    if state.current_entry.is_empty() {
        return TransitionResult::unchanged(state);
    }

    // Chaining: a second operator evaluates the first one
    let mut result = if state.has_pending_operand() {
        compute(state)
    } else {
        TransitionResult::unchanged(state)
    };

    let next = &mut result.new_state;
    next.pending_operation = Some(op);
    next.pending_operand = next.current_entry.clone();
    next.reset_on_next_digit = true;

    result
}

fn compute(state: &CalcState) -> TransitionResult {
    let (Some(prev), Some(current)) = (
        parse_operand(&state.pending_operand),
        parse_operand(&state.current_entry),
    ) else {
        return TransitionResult::unchanged(state);
    };
    let Some(op) = state.pending_operation else {
        return TransitionResult::unchanged(state);
    };

    let value = match op {
        Operation::Add => prev + current,
        Operation::Subtract => prev - current,
        Operation::Multiply => prev * current,
        Operation::Divide => {
            if current == 0.0 {
                return TransitionResult::new(CalcState::default())
                    .with_effect(Effect::divide_by_zero());
            }
            prev / current
        }
        Operation::Percentage => prev * (current / 100.0),
    };

    let value = round8(value);
    if !value.is_finite() {
        return TransitionResult::unchanged(state);
    }

    TransitionResult::new(CalcState {
        current_entry: format_number(value),
        pending_operand: String::new(),
        pending_operation: None,
        reset_on_next_digit: true,
    })
}

fn inline_percentage(state: &CalcState) -> TransitionResult {
    if state.has_pending_operand() {
        return choose_operation(state, Operation::Percentage);
    }

    let Some(value) = parse_operand(&state.current_entry) else {
        return TransitionResult::unchanged(state);
    };

    let mut next = state.clone();
    next.current_entry = format_number(value / 100.0);
    TransitionResult::new(next)
}
