use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::{
    config::{DEMO_DIGITS, DEMO_HOLD_DURATION, DEMO_NUMBER, INTERACTIVE_HOLD_DURATION, RULE_WIDTH},
    error::PhoneError,
    hardware::{Clock, Output},
    phone::Phone,
};

/// Walks the phone through the demonstration, then offers to dial one number
/// read from `input`.
///
/// Errors the demo provokes on purpose are caught and printed; anything else
/// is handed back to the caller.
pub async fn ui_entry<C, O, R>(phone: &mut Phone<C, O>, input: &mut R) -> Result<(), PhoneError>
where
    C: Clock,
    O: Output,
    R: AsyncBufRead + Unpin,
{
    let stars = "*".repeat(RULE_WIDTH);
    let output = phone.output_mut();
    output.emit_line("");
    output.emit_line(&stars);
    output.emit_line("LEGENDARY ROTARY PHONE SIMULATOR");
    output.emit_line(&stars);
    output.emit_line("");

    phone
        .output_mut()
        .emit_line("Example 1: Dialing number digit by digit\n");
    for digit in DEMO_DIGITS {
        phone.dial_digit(digit).await?;
    }

    phone.status();

    phone.call().await?;
    phone.hold(DEMO_HOLD_DURATION).await;
    phone.hang_up().await;

    phone
        .output_mut()
        .emit_line("\n\nExample 2: Dialing a complete number\n");
    phone.dial_number(DEMO_NUMBER).await?;
    phone.call().await?;
    phone.hold(DEMO_HOLD_DURATION).await;
    phone.hang_up().await;

    phone.status();

    phone
        .output_mut()
        .emit_line("\nExample 3: Demonstrating error handling\n");
    if let Err(error) = phone.dial_digit('A').await {
        report_caught(phone, &error);
    }
    if let Err(error) = phone.call().await {
        report_caught(phone, &error);
    }

    phone
        .output_mut()
        .emit_line("\n\nExample 4: Interactive mode (dial any 5-digit number)\n");
    phone
        .output_mut()
        .emit("Enter a 5-digit number to dial (or press Enter to skip): ");

    let number = read_number(input).await;
    if !number.is_empty() {
        if let Err(error) = dial_and_call(phone, &number).await {
            debug!(%error, "interactive call failed");
            phone.output_mut().emit_line(&format!("❌ Error: {error}"));
        }
    } else {
        phone.output_mut().emit_line("");
    }

    phone.status();

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    Interrupted,
}

/// Runs [`ui_entry`] until it finishes or `interrupt` resolves.
///
/// On interrupt the demo is abandoned at whatever delay it was in and the
/// phone is hung up if a call was in progress.
pub async fn run_until<C, O, R, I>(
    phone: &mut Phone<C, O>,
    input: &mut R,
    interrupt: I,
) -> Result<RunOutcome, PhoneError>
where
    C: Clock,
    O: Output,
    R: AsyncBufRead + Unpin,
    I: Future,
{
    // Interrupt is polled first so a pending Ctrl-C wins over a demo step
    // that is ready at the same time.
    let finished = tokio::select! {
        biased;
        _ = interrupt => None,
        result = ui_entry(phone, input) => Some(result),
    };

    if let Some(result) = finished {
        return result.map(|()| RunOutcome::Finished);
    }

    phone
        .output_mut()
        .emit_line("\n\nSimulation interrupted by user.");

    if phone.is_connected() {
        warn!("interrupted mid-call, hanging up");
        phone.hang_up().await;
    }

    Ok(RunOutcome::Interrupted)
}

async fn dial_and_call<C: Clock, O: Output>(
    phone: &mut Phone<C, O>,
    number: &str,
) -> Result<(), PhoneError> {
    phone.dial_number(number).await?;
    phone.call().await?;
    phone.hold(INTERACTIVE_HOLD_DURATION).await;
    phone.hang_up().await;

    Ok(())
}

fn report_caught<C: Clock, O: Output>(phone: &mut Phone<C, O>, error: &PhoneError) {
    debug!(%error, "demo error caught");
    phone
        .output_mut()
        .emit_line(&format!("❌ Error caught: {error}"));
}

/// One trimmed line, or nothing at end of input or on a read failure.
async fn read_number<R: AsyncBufRead + Unpin>(input: &mut R) -> String {
    let mut line = String::new();

    match input.read_line(&mut line).await {
        Ok(_) => line.trim().to_string(),
        Err(error) => {
            warn!(%error, "failed to read number from input");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::fake::{BufferedOutput, RecordingClock};

    #[tokio::test]
    async fn read_number_trims_and_handles_eof() {
        let mut input: &[u8] = b"  12345 \nignored\n";
        assert_eq!(read_number(&mut input).await, "12345");

        let mut empty: &[u8] = b"";
        assert_eq!(read_number(&mut empty).await, "");
    }

    #[tokio::test]
    async fn interrupt_mid_call_hangs_up() {
        let mut phone = Phone::new(RecordingClock::create(), BufferedOutput::create());
        phone.dial_number("5551234").await.unwrap();
        phone.call().await.unwrap();
        phone.output_mut().take();

        let mut input: &[u8] = b"";
        let outcome = run_until(&mut phone, &mut input, std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Interrupted);
        assert!(!phone.is_connected());
        assert_eq!(phone.dialed_number(), "");
        assert_eq!(phone.call_log(), ["5551234"]);

        let text = &phone.output().text;
        assert!(text.starts_with("\n\nSimulation interrupted by user.\n"));
        assert!(text.contains("📞 Hanging up...\nCall ended."));
    }

    #[tokio::test]
    async fn interrupt_while_idle_does_not_hang_up() {
        let mut phone = Phone::new(RecordingClock::create(), BufferedOutput::create());

        let mut input: &[u8] = b"";
        let outcome = run_until(&mut phone, &mut input, std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Interrupted);
        assert!(phone.clock().slept.is_empty());
        assert!(!phone.output().contains("Hanging up"));
        assert!(!phone.output().contains("No active call"));
    }

    #[tokio::test]
    async fn run_without_interrupt_finishes_demo() {
        let mut phone = Phone::new(RecordingClock::create(), BufferedOutput::create());

        let mut input: &[u8] = b"\n";
        let outcome = run_until(&mut phone, &mut input, std::future::pending::<()>())
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Finished);
        assert_eq!(phone.call_log().len(), 2);
        assert!(!phone.output().contains("Simulation interrupted"));
    }

    #[tokio::test]
    async fn report_caught_prefixes_error() {
        let mut phone = Phone::new(RecordingClock::create(), BufferedOutput::create());

        report_caught(&mut phone, &PhoneError::NothingDialed);

        assert_eq!(
            phone.output().text,
            "❌ Error caught: Cannot initiate a call. No digits dialed.\n"
        );
    }
}
