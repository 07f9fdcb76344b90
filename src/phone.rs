use std::{fmt, time::Duration};

use tracing::{debug, info};

use crate::{
    config::{HANG_UP_DURATION, INTER_DIGIT_PAUSE, PULSE_DURATION, RING_DURATION, RULE_WIDTH},
    error::PhoneError,
    hardware::{
        emulated::{Terminal, TokioClock},
        Clock, Output,
    },
};

/// Number of pulses the dial sends for `digit`. Zero is the long pull.
pub fn pulse_count(digit: char) -> Option<u32> {
    match digit {
        '0' => Some(10),
        '1'..='9' => digit.to_digit(10),
        _ => None,
    }
}

/// How long the dial takes to return after being pulled to `digit`.
pub fn dial_delay(digit: char) -> Option<Duration> {
    pulse_count(digit).map(|pulses| PULSE_DURATION * pulses)
}

/// Checks that `number` is a non-empty run of digits 0-9.
pub fn validate(number: &str) -> Result<(), PhoneError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(PhoneError::InvalidNumber(number.to_string()));
    }

    Ok(())
}

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Idle,
    Dialing,
    Connected,
}

/// Read-only copy of the phone at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneStatus {
    pub dialed_number: Option<String>,
    pub connected: bool,
    pub call_log: Vec<String>,
}

impl PhoneStatus {
    pub fn calls_made(&self) -> usize {
        self.call_log.len()
    }
}

impl fmt::Display for PhoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let double = rule('=');

        writeln!(f, "{double}")?;
        writeln!(f, "ROTARY PHONE STATUS")?;
        writeln!(f, "{double}")?;
        writeln!(
            f,
            "Dialed Number: {}",
            self.dialed_number.as_deref().unwrap_or("(none)")
        )?;
        writeln!(f, "Connected: {}", if self.connected { "Yes" } else { "No" })?;
        writeln!(f, "Calls Made: {}", self.calls_made())?;
        if !self.call_log.is_empty() {
            writeln!(f, "Call History: {}", self.call_log.join(", "))?;
        }
        writeln!(f, "{double}")
    }
}

pub struct Phone<C = TokioClock, O = Terminal> {
    clock: C,
    output: O,

    dialed_digits: Vec<char>,
    connected: bool,
    call_log: Vec<String>,
}

impl Phone {
    /// A phone on the real timer and stdout.
    pub fn create() -> Self {
        Phone::new(TokioClock::create(), Terminal::create())
    }
}

impl<C: Clock, O: Output> Phone<C, O> {
    pub fn new(clock: C, output: O) -> Self {
        Phone {
            clock,
            output,

            dialed_digits: Vec::new(),
            connected: false,
            call_log: Vec::new(),
        }
    }

    /// Starts with `number` already in the buffer. Nothing is dialed, so no
    /// time passes and nothing is printed. An empty `number` preloads nothing.
    pub fn with_number(clock: C, output: O, number: &str) -> Result<Self, PhoneError> {
        let mut phone = Self::new(clock, output);
        if number.is_empty() {
            return Ok(phone);
        }

        validate(number)?;
        phone.dialed_digits = number.chars().collect();

        Ok(phone)
    }

    pub fn dialed_number(&self) -> String {
        self.dialed_digits.iter().collect()
    }

    pub fn call_log(&self) -> &[String] {
        &self.call_log
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn line_state(&self) -> LineState {
        if self.connected {
            LineState::Connected
        } else if self.dialed_digits.is_empty() {
            LineState::Idle
        } else {
            LineState::Dialing
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub async fn dial_digit(&mut self, digit: char) -> Result<(), PhoneError> {
        if self.connected {
            return Err(PhoneError::AlreadyConnected);
        }

        let Some(pulses) = pulse_count(digit) else {
            return Err(PhoneError::InvalidDigit(digit));
        };
        let delay = PULSE_DURATION * pulses;

        self.output.emit(&format!("Dialing {digit}... "));
        self.clock.sleep(delay).await;
        self.output
            .emit_line(&format!("[{:.2}s]", delay.as_secs_f64()));

        self.dialed_digits.push(digit);
        debug!(%digit, pulses, buffered = self.dialed_digits.len(), "digit dialed");

        self.clock.sleep(INTER_DIGIT_PAUSE).await;

        Ok(())
    }

    pub async fn dial_number(&mut self, number: &str) -> Result<(), PhoneError> {
        validate(number)?;

        if self.connected {
            return Err(PhoneError::AlreadyConnected);
        }

        self.output.emit_line("");
        self.output.emit_line(&format!("Starting to dial: {number}"));
        self.output.emit_line(&rule('-'));

        for digit in number.chars() {
            self.dial_digit(digit).await?;
        }

        Ok(())
    }

    pub async fn call(&mut self) -> Result<bool, PhoneError> {
        if self.dialed_digits.is_empty() {
            return Err(PhoneError::NothingDialed);
        }

        let number = self.dialed_number();

        self.output.emit_line("");
        self.output.emit_line(&rule('='));
        self.output.emit_line(&format!("Calling: {number}"));
        self.output.emit_line(&rule('='));

        self.clock.sleep(RING_DURATION).await;

        self.connected = true;
        self.call_log.push(number.clone());
        info!(%number, calls_made = self.call_log.len(), "call connected");

        self.output.emit_line("📞 Connected!");
        self.output
            .emit_line(&format!("Status: Call in progress with {number}"));

        Ok(true)
    }

    pub async fn hang_up(&mut self) {
        if !self.connected {
            self.output.emit_line("No active call to hang up.");
            return;
        }

        self.output.emit_line("");
        self.output.emit_line(&rule('-'));
        self.output.emit_line("📞 Hanging up...");

        self.clock.sleep(HANG_UP_DURATION).await;

        self.connected = false;
        self.dialed_digits.clear();
        info!("call ended");

        self.output.emit_line("Call ended.");
        self.output.emit_line(&rule('-'));
    }

    pub fn clear(&mut self) {
        self.dialed_digits.clear();
        self.output.emit_line("Dialed number cleared.");
    }

    pub fn status(&mut self) -> PhoneStatus {
        let status = self.snapshot();

        self.output.emit_line("");
        self.output.emit_line(&status.to_string());

        status
    }

    /// Stays on the line for `duration`.
    pub async fn hold(&mut self, duration: Duration) {
        self.clock.sleep(duration).await;
    }

    fn snapshot(&self) -> PhoneStatus {
        PhoneStatus {
            dialed_number: (!self.dialed_digits.is_empty()).then(|| self.dialed_number()),
            connected: self.connected,
            call_log: self.call_log.clone(),
        }
    }
}
