use anyhow::Context;
use rotary_phone::{
    phone::Phone,
    ui::{run_until, RunOutcome},
};
use tokio::io::{stdin, BufReader};
use tracing_subscriber::EnvFilter;

// 128 + SIGINT, what a shell reports for a Ctrl-C'd process.
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut phone = Phone::create();
    let mut input = BufReader::new(stdin());

    let outcome = run_until(&mut phone, &mut input, tokio::signal::ctrl_c())
        .await
        .context("rotary phone demo failed")?;

    if outcome == RunOutcome::Interrupted {
        // A pending stdin read would otherwise hold up runtime shutdown.
        std::process::exit(EXIT_INTERRUPTED);
    }

    Ok(())
}
