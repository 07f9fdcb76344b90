use std::{
    io::{self, Write},
    time::Duration,
};

use crate::hardware::{Clock, Output};

/// Wall-clock delays on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl TokioClock {
    pub fn create() -> Self {
        TokioClock
    }
}

impl Clock for TokioClock {
    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Writes to stdout, flushing every time so "Dialing 5... " shows up while
/// the dial is still turning.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn create() -> Self {
        Terminal {
            stdout: io::stdout(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::create()
    }
}

impl Output for Terminal {
    fn emit(&mut self, text: &str) {
        let mut lock = self.stdout.lock();

        // A closed stdout is not worth stopping the phone for.
        let _ = lock.write_all(text.as_bytes());
        let _ = lock.flush();
    }
}
