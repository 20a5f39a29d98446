//! Calculator runtime executor

use super::traits::Notifier;
use crate::keymap::KeyInput;
use crate::state_machine::{transition, CalcState, Display, Effect, Event};

/// Holds the calculator state for the life of the process and executes
/// the effects of every transition through `N`.
pub struct Calculator<N: Notifier> {
    state: CalcState,
    notifier: N,
}

impl<N: Notifier> Calculator<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: CalcState::default(),
            notifier,
        }
    }

    #[allow(dead_code)] // API completeness
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn display(&self) -> Display {
        Display::from_state(&self.state)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Apply one event and return what should be rendered next
    pub fn dispatch(&mut self, event: Event) -> Display {
        let result = transition(&self.state, event);

        if result.new_state == self.state {
            tracing::trace!(?event, "Event left state unchanged");
        } else {
            tracing::debug!(
                ?event,
                entry = %result.new_state.current_entry,
                operand = %result.new_state.pending_operand,
                operation = ?result.new_state.pending_operation,
                "State transition"
            );
        }

        self.state = result.new_state;
        for effect in result.effects {
            self.execute_effect(effect);
        }

        self.display()
    }

    /// Look up a key and dispatch its event. Unmapped keys return `None`.
    pub fn press(&mut self, key: KeyInput) -> Option<Display> {
        let Some(event) = key.to_event() else {
            tracing::trace!(?key, "Ignoring unmapped key");
            return None;
        };
        Some(self.dispatch(event))
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(error) => {
                tracing::warn!(error = %error, "Calculator reset");
                self.notifier.notify(&error);
            }
        }
    }
}
