//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::number::{format_number, round8};
use super::transition::*;
use super::*;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn apply_all(mut state: CalcState, events: &[Event]) -> (CalcState, Vec<Effect>) {
    let mut effects = vec![];
    for event in events {
        let result = transition(&state, *event);
        state = result.new_state;
        effects.extend(result.effects);
    }
    (state, effects)
}

fn is_valid_state(state: &CalcState) -> bool {
    let entry = &state.current_entry;
    let points = entry.matches('.').count();
    let numeric = entry == "." || entry.parse::<f64>().is_ok_and(f64::is_finite);
    !entry.is_empty() && points <= 1 && numeric
}

/// Operands as the calculator would print them
fn operand_text(value: f64) -> String {
    format_number(round8(value))
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_digit() -> impl Strategy<Value = Digit> {
    prop_oneof![
        9 => proptest::char::range('0', '9'),
        1 => Just('.'),
    ]
    .prop_map(|c| Digit::new(c).unwrap())
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
        Just(Operation::Percentage),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        6 => arb_digit().prop_map(Event::AppendDigit),
        1 => Just(Event::DeleteLastDigit),
        2 => arb_operation().prop_map(Event::ChooseOperation),
        1 => Just(Event::Compute),
        1 => Just(Event::InlinePercentage),
        1 => Just(Event::Clear),
    ]
}

fn arb_operand() -> impl Strategy<Value = f64> {
    (-1_000_000i64..1_000_000, 0u32..4).prop_map(|(mantissa, scale)| {
        #[allow(clippy::cast_precision_loss)]
        let value = mantissa as f64 / f64::from(10u32.pow(scale));
        value
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: Valid state after any transition
    #[test]
    fn prop_transitions_preserve_validity(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut state = CalcState::default();
        for event in events {
            state = transition(&state, event).new_state;
            prop_assert!(is_valid_state(&state), "Invalid state: {:?}", state);
            prop_assert_eq!(
                state.pending_operation.is_some(),
                state.has_pending_operand(),
                "operand and operation out of step: {:?}", state
            );
        }
    }

    // Invariant 2: Digit entry never produces two decimal points
    #[test]
    fn prop_digits_never_double_point(digits in proptest::collection::vec(arb_digit(), 0..30)) {
        let events: Vec<Event> = digits.into_iter().map(Event::AppendDigit).collect();
        let (state, effects) = apply_all(CalcState::default(), &events);
        prop_assert!(state.current_entry.matches('.').count() <= 1);
        prop_assert!(effects.is_empty());
    }

    // Invariant 3: Addition matches rounded f64 addition
    #[test]
    fn prop_add_matches_rounded_sum(a in arb_operand(), b in arb_operand()) {
        let state = CalcState {
            current_entry: format_number(a),
            ..CalcState::default()
        };
        let mut state = transition(&state, Event::ChooseOperation(Operation::Add)).new_state;
        state.current_entry = format_number(b);
        let result = transition(&state, Event::Compute);

        prop_assert_eq!(result.new_state.current_entry, operand_text(a + b));
        prop_assert!(result.effects.is_empty());
    }

    // Invariant 4: Division by zero always lands on the startup state
    #[test]
    fn prop_divide_by_zero_clears(operand in arb_operand(), zero in prop_oneof![Just("0"), Just("0.0"), Just(".0"), Just("0.")]) {
        let state = CalcState {
            current_entry: zero.to_string(),
            pending_operand: format_number(operand),
            pending_operation: Some(Operation::Divide),
            reset_on_next_digit: false,
        };
        let result = transition(&state, Event::Compute);
        prop_assert_eq!(result.new_state, CalcState::default());
        prop_assert_eq!(result.effects, vec![Effect::Notify(CalcError::DivideByZero)]);
    }

    // Invariant 5: Only division by zero produces effects
    #[test]
    fn prop_effects_only_from_divide_by_zero(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut state = CalcState::default();
        for event in events {
            let before = state.clone();
            let result = transition(&state, event);
            if !result.effects.is_empty() {
                prop_assert_eq!(before.pending_operation, Some(Operation::Divide));
                prop_assert!(result.effects.iter().all(|e| *e == Effect::divide_by_zero()));
            }
            state = result.new_state;
        }
    }

    // Invariant 6: Clear always returns to the startup state
    #[test]
    fn prop_clear_resets(events in proptest::collection::vec(arb_event(), 0..20)) {
        let (state, _) = apply_all(CalcState::default(), &events);
        let result = transition(&state, Event::Clear);
        prop_assert_eq!(result.new_state, CalcState::default());
        prop_assert!(result.effects.is_empty());
    }

    // Invariant 7: Delete is idempotent once the entry is back at "0"
    #[test]
    fn prop_delete_reaches_zero(digits in proptest::collection::vec(arb_digit(), 0..15)) {
        let events: Vec<Event> = digits.into_iter().map(Event::AppendDigit).collect();
        let (mut state, _) = apply_all(CalcState::default(), &events);
        for _ in 0..20 {
            state = transition(&state, Event::DeleteLastDigit).new_state;
        }
        prop_assert_eq!(&state.current_entry, "0");
        let again = transition(&state, Event::DeleteLastDigit).new_state;
        prop_assert_eq!(again, state);
    }

    // Invariant 8: Chaining equals computing step by step
    #[test]
    fn prop_chaining_evaluates_left_to_right(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let keys = format!("{a}+{b}+{c}");
        let mut events: Vec<Event> = keys
            .chars()
            .map(|ch| match ch {
                '+' => Event::ChooseOperation(Operation::Add),
                d => Event::AppendDigit(Digit::new(d).unwrap()),
            })
            .collect();
        events.push(Event::Compute);

        let (state, _) = apply_all(CalcState::default(), &events);
        prop_assert_eq!(state.current_entry, (a + b + c).to_string());
    }

    // Invariant 9: The display mirrors the state
    #[test]
    fn prop_display_mirrors_state(events in proptest::collection::vec(arb_event(), 0..20)) {
        let (state, _) = apply_all(CalcState::default(), &events);
        let display = Display::from_state(&state);
        prop_assert_eq!(&display.primary, &state.current_entry);
        match state.pending_operation {
            Some(op) => {
                prop_assert!(display.secondary.starts_with(&state.pending_operand));
                prop_assert!(display.secondary.ends_with(op.symbol()));
            }
            None => prop_assert_eq!(&display.secondary, &state.pending_operand),
        }
    }
}
