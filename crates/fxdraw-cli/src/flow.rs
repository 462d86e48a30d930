//! The ceremony itself: roll call, input confirmation, draw, reveal.
//!
//! Inputs may arrive as command-line flags or be typed at the prompts. Flag
//! values feed the first round of the confirmation loop; if the operator
//! declines them, the loop starts over fully interactive. The draw runs the
//! moment the inputs are confirmed, so the seed printed in the reveal is the
//! seed that was actually used.

use std::sync::Arc;

use fxdraw_core::{DrawEngine, DrawOutcome, RateDate, RateSource, Roster};

use crate::error::CliError;
use crate::output::{self, Pacing};
use crate::prompt::Prompter;

/// Everything the ceremony needs besides the roster and the rate source.
#[derive(Debug, Clone)]
pub struct CeremonyConfig {
    pub title: String,
    pub date: Option<String>,
    pub number: Option<String>,
    pub assume_yes: bool,
    pub pacing: Pacing,
}

/// Run the full ceremony and return the outcome.
///
/// The confirmation loop keeps asking until the operator answers exactly
/// `YES` (or `--yes` was given). A date typed at the prompt that fails to
/// parse is reported and re-asked; a date that came from the command line
/// fails the run instead, since there is nobody mid-ceremony to correct it.
pub async fn run_ceremony(
    roster: &Roster,
    config: &CeremonyConfig,
    source: Arc<dyn RateSource>,
    prompter: &mut dyn Prompter,
) -> Result<DrawOutcome, CliError> {
    output::opening(&config.title, roster, config.pacing).await;

    let mut date_prefill = config.date.clone();
    let mut number_prefill = config.number.clone();

    let (date, number) = loop {
        let date_from_flag = date_prefill.is_some();
        let date_input = match date_prefill.take() {
            Some(value) => value,
            None => {
                let value = prompter.ask("Reference date  : ")?;
                println!();
                value
            }
        };

        let date = match RateDate::parse(&date_input) {
            Ok(date) => date,
            Err(error) if date_from_flag => return Err(error.into()),
            Err(error) => {
                println!("{error}");
                println!();
                continue;
            }
        };

        let number = match number_prefill.take() {
            Some(value) => value,
            None => {
                let value = prompter.ask("Operator number : ")?;
                println!();
                value
            }
        };

        output::echo_inputs(&date.format_iso(), &number);

        if config.assume_yes {
            break (date, number);
        }
        let answer = prompter.ask("Confirm these inputs [YES/no]? ")?;
        println!();
        if answer == "YES" {
            break (date, number);
        }
    };

    let engine = DrawEngine::new(source);
    let outcome = engine.draw(roster, date, &number).await?;

    output::reveal_seed(date, &number, &outcome, config.pacing).await;
    output::suspense(config.pacing).await?;
    output::announce_winner(&outcome.winner, config.pacing).await?;

    Ok(outcome)
}
