//! Mock implementations for testing

use super::traits::Notifier;
use crate::state_machine::CalcError;

/// Notifier that records every notice it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<CalcError>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, error: &CalcError) {
        self.notices.push(*error);
    }
}
