//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use crate::state_machine::CalcError;
use std::io::Write;

/// Surface for telling the user about a recovered error
pub trait Notifier {
    fn notify(&mut self, error: &CalcError);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, error: &CalcError) {
        (**self).notify(error);
    }
}

/// Writes notices as `error: {message}` lines
pub struct WriterNotifier<W: Write> {
    writer: W,
}

impl<W: Write> WriterNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Notifier for WriterNotifier<W> {
    fn notify(&mut self, error: &CalcError) {
        if let Err(e) = writeln!(self.writer, "error: {error}") {
            tracing::warn!(error = %e, "Failed to write notice");
        }
    }
}
