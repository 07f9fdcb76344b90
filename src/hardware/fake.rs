use std::time::Duration;

use crate::hardware::{Clock, Output};

/// Returns immediately and remembers every delay it was asked for.
#[derive(Debug, Default, Clone)]
pub struct RecordingClock {
    pub slept: Vec<Duration>,
}

impl RecordingClock {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.slept.iter().sum()
    }
}

impl Clock for RecordingClock {
    async fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}

/// Collects emitted text in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    pub text: String,
}

impl BufferedOutput {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl Output for BufferedOutput {
    fn emit(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_clock_keeps_every_delay() {
        let mut clock = RecordingClock::create();

        clock.sleep(Duration::from_millis(100)).await;
        clock.sleep(Duration::from_millis(500)).await;

        assert_eq!(
            clock.slept,
            vec![Duration::from_millis(100), Duration::from_millis(500)]
        );
        assert_eq!(clock.total(), Duration::from_millis(600));
    }

    #[test]
    fn emit_line_appends_newline() {
        let mut output = BufferedOutput::create();

        output.emit("Dialing 5... ");
        output.emit_line("[0.50s]");

        assert_eq!(output.take(), "Dialing 5... [0.50s]\n");
        assert!(output.text.is_empty());
    }
}
