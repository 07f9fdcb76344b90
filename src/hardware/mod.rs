use std::{future::Future, time::Duration};

pub mod emulated;
pub mod fake;

/// Source of the deliberate, human-paced delays the phone makes while
/// dialing, ringing and hanging up.
pub trait Clock {
    fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()>;
}

/// Where the phone's progress text goes. Text is emitted verbatim, so
/// partial lines are allowed.
pub trait Output {
    fn emit(&mut self, text: &str);

    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }
}
