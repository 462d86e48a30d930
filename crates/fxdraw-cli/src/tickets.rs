use std::fs;
use std::path::Path;

use fxdraw_core::Roster;
use tracing::debug;

use crate::error::CliError;

/// Load the roster from a ticket file.
///
/// One name per line; surrounding whitespace is trimmed and blank lines are
/// skipped. Duplicate names are rejected, the line order becomes the ticket
/// order.
pub fn load_roster(path: &Path) -> Result<Roster, CliError> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::TicketFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let names: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    let roster = Roster::new(names)?;
    debug!(path = %path.display(), entries = roster.len(), "loaded ticket file");
    Ok(roster)
}
