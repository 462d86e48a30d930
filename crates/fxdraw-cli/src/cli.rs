//! CLI argument definitions for fxdraw.
//!
//! fxdraw runs a single interactive ceremony, so there are no subcommands:
//! the ticket file is the one positional argument, and the options either
//! prefill the interactive prompts or adjust how the ceremony runs.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--title` | `Prize draw` | Heading shown in the opening banner |
//! | `--date` | prompt | Reference date (YYYY-MM-DD) for the rate lookup |
//! | `--number` | prompt | Operator number prepended to the seed |
//! | `--yes` | `false` | Skip the confirmation question |
//! | `--no-delay` | `false` | Disable the ceremonial pacing |
//! | `--timeout-ms` | `10000` | Rate lookup timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Full interactive ceremony
//! fxdraw entrants.txt
//!
//! # Scripted rehearsal: no prompts, no pauses
//! fxdraw entrants.txt --date 2026-01-30 --number 7 --yes --no-delay
//! ```

use std::path::PathBuf;

use clap::Parser;

/// fxdraw - auditable prize draws from Norges Bank exchange rates
///
/// Draws one winner from a list of named tickets. The generator seed is the
/// operator number followed by the day's canonicalized exchange-rate fixings,
/// so the draw can be replayed by anyone from public data.
#[derive(Debug, Parser)]
#[command(
    name = "fxdraw",
    version,
    about = "Auditable prize draws from Norges Bank exchange rates",
    long_about = "fxdraw draws one winner from a file of named tickets.\n\
\n\
The random seed is built from public data: Norges Bank's exchange-rate \
fixings for an agreed date, canonicalized to a digit string and prefixed \
with a number the operator announces at the ceremony. Re-running with the \
same inputs reproduces the same winner, so the draw is verifiable after \
the fact.\n\
\n\
The date and operator number are asked for interactively and must be \
confirmed with YES before the draw runs; --date, --number and --yes \
prefill or skip those steps for scripted runs."
)]
pub struct Cli {
    /// Ticket file: one participant name per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    /// Every name must be unique.
    pub tickets: PathBuf,

    /// Heading shown in the opening banner.
    #[arg(long, default_value = "Prize draw")]
    pub title: String,

    /// Reference date (YYYY-MM-DD) for the rate lookup; prompted for when
    /// omitted.
    #[arg(long)]
    pub date: Option<String>,

    /// Operator number prepended to the seed; prompted for when omitted.
    #[arg(long)]
    pub number: Option<String>,

    /// Skip the confirmation question.
    #[arg(long, default_value_t = false)]
    pub yes: bool,

    /// Disable the ceremonial pacing between transcript lines.
    ///
    /// Useful for rehearsals and scripted runs; the draw itself is
    /// unaffected.
    #[arg(long, default_value_t = false)]
    pub no_delay: bool,

    /// Rate lookup timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}
