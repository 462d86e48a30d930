//! Ceremony transcript rendering.
//!
//! The transcript is printed line by line with deliberate pauses between the
//! dramatic steps; the pauses carry no logic and can be disabled wholesale
//! with [`Pacing::none`]. Labelled lines share one label column so the
//! transcript reads as a table.

use std::io::{self, Write};
use std::time::Duration;

use fxdraw_core::{DrawOutcome, RateDate, Roster};

pub const WIDTH: usize = 60;

const LABEL_WIDTH: usize = "Seed value         : ".len();
const VALUE_WIDTH: usize = WIDTH - LABEL_WIDTH;

/// Pacing of the ceremony transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    enabled: bool,
}

impl Pacing {
    pub const fn standard() -> Self {
        Self { enabled: true }
    }

    pub const fn none() -> Self {
        Self { enabled: false }
    }

    pub async fn beat(&self, millis: u64) {
        if self.enabled {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

fn banner() {
    println!("{}", "*".repeat(WIDTH));
}

fn centered(text: &str) -> String {
    format!("{text:^WIDTH$}")
}

fn labelled(label: &str, value: &str) -> String {
    format!("{label:<19}: {value}")
}

/// Split a value into label-column-sized lines. Always yields at least one
/// chunk so the labelled first line exists even for an empty value.
fn wrap_value(value: &str, width: usize) -> Vec<String> {
    if value.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = value.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn engine_signature() -> String {
    format!("fxdraw {} (MT19937-64)", env!("CARGO_PKG_VERSION"))
}

/// Opening banner and the roll call of entries.
pub async fn opening(title: &str, roster: &Roster, pacing: Pacing) {
    println!();
    banner();
    println!("{}", centered(title));
    banner();
    println!();
    pacing.beat(2_000).await;

    let prefix = format!("{:>2} entries   : ", roster.len());
    let indent = " ".repeat(prefix.chars().count());
    if let Some((first, rest)) = roster.names().split_first() {
        println!("{prefix}{first}");
        for name in rest {
            println!("{indent}{name}");
            pacing.beat(200).await;
        }
    }
    println!();
    banner();
    println!();
}

/// Echo the entered inputs back for confirmation.
pub fn echo_inputs(date: &str, number: &str) {
    println!("{}", labelled("Rate reference date", date));
    println!("{}", labelled("Operator number", number));
    println!();
}

/// The audit block: engine identity, inputs, and the full seed wrapped to
/// the transcript width.
pub async fn reveal_seed(date: RateDate, number: &str, outcome: &DrawOutcome, pacing: Pacing) {
    banner();
    println!();
    println!("The draw will proceed with");
    println!();
    println!("{}", labelled("Engine", &engine_signature()));
    println!("{}", labelled("Rate reference date", &date.format_iso()));
    println!("{}", labelled("Operator number", number));

    let chunks = wrap_value(outcome.seed.as_str(), VALUE_WIDTH);
    if let Some((first, rest)) = chunks.split_first() {
        println!("{}", labelled("Seed value", first));
        for chunk in rest {
            pacing.beat(500).await;
            println!("{}{chunk}", " ".repeat(LABEL_WIDTH));
        }
    }
    println!();
    banner();
    println!();
}

/// Seven slow dots while the room holds its breath.
pub async fn suspense(pacing: Pacing) -> io::Result<()> {
    print!("The draw is under way ");
    io::stdout().flush()?;
    for _ in 0..7 {
        print!(".");
        io::stdout().flush()?;
        pacing.beat(1_000).await;
    }
    println!();
    println!();
    pacing.beat(2_000).await;
    Ok(())
}

/// Three more dots, then the name.
pub async fn announce_winner(winner: &str, pacing: Pacing) -> io::Result<()> {
    banner();
    println!();
    print!("And the winner is ");
    io::stdout().flush()?;
    for _ in 0..3 {
        print!(".");
        io::stdout().flush()?;
        pacing.beat(1_000).await;
    }
    println!(" {winner}");
    println!();
    banner();
    println!();
    println!();
    Ok(())
}
