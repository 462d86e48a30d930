mod cli;
mod error;
mod flow;
mod output;
mod prompt;
mod tickets;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use fxdraw_core::NorgesBankSource;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::flow::CeremonyConfig;
use crate::output::Pacing;
use crate::prompt::StdinPrompter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

// Diagnostics go to stderr so the transcript on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let roster = tickets::load_roster(&cli.tickets)?;
    let source = Arc::new(NorgesBankSource::new().with_timeout_ms(cli.timeout_ms));
    let config = CeremonyConfig {
        title: cli.title,
        date: cli.date,
        number: cli.number,
        assume_yes: cli.yes,
        pacing: if cli.no_delay {
            Pacing::none()
        } else {
            Pacing::standard()
        },
    };

    let mut prompter = StdinPrompter;
    flow::run_ceremony(&roster, &config, source, &mut prompter).await?;
    Ok(())
}
