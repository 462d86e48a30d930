use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::domain::{RateDate, Roster, Seed};
use crate::error::DrawError;
use crate::rate_source::RateSource;
use crate::rng::seeded_generator;

/// Result of one completed draw.
///
/// Carries the exact seed that drove the generator so the transcript, and
/// anyone holding it later, can reproduce the draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub seed: Seed,
    pub winner: String,
    /// 1-based ticket number of the winner.
    pub winner_ticket: usize,
}

/// Runs draws against an injected rate source.
pub struct DrawEngine {
    source: Arc<dyn RateSource>,
}

impl DrawEngine {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Draw one winner from the roster.
    ///
    /// Fetches the canonical rates for `date`, composes the seed as the
    /// operator number followed by the rate string, seeds a fresh MT19937-64
    /// instance and draws a single ticket number uniformly from
    /// `1..=roster.len()`.
    pub async fn draw(
        &self,
        roster: &Roster,
        date: RateDate,
        operator_number: &str,
    ) -> Result<DrawOutcome, DrawError> {
        let rates = self.source.canonical_rates(date).await?;
        let seed = Seed::compose(operator_number, &rates);

        let mut generator = seeded_generator(&seed);
        let winner_ticket = generator.gen_range(1..=roster.len());
        let winner = roster
            .entry(winner_ticket)
            .expect("drawn ticket number must exist in the roster")
            .to_owned();

        debug!(tickets = roster.len(), winner_ticket, "draw complete");

        Ok(DrawOutcome {
            seed,
            winner,
            winner_ticket,
        })
    }
}
