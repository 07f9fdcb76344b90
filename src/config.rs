use std::time::Duration;

pub const PULSE_DURATION: Duration = Duration::from_millis(100);
pub const INTER_DIGIT_PAUSE: Duration = Duration::from_millis(500);

pub const RING_DURATION: Duration = Duration::from_secs(1);
pub const HANG_UP_DURATION: Duration = Duration::from_millis(500);

// How long the demo stays on the line before hanging up.
pub const DEMO_HOLD_DURATION: Duration = Duration::from_secs(2);
pub const INTERACTIVE_HOLD_DURATION: Duration = Duration::from_secs(1);

pub const DEMO_DIGITS: [char; 7] = ['5', '5', '5', '1', '2', '3', '4'];
pub const DEMO_NUMBER: &str = "2125551234";

pub const RULE_WIDTH: usize = 40;
