use std::collections::HashSet;

use crate::error::ValidationError;

/// Ordered list of lottery participants.
///
/// Construction rejects duplicates, so a `Roster` always satisfies the draw
/// precondition that every name holds exactly one ticket. Order is preserved
/// exactly as given: ticket numbers are positions in this list, counted
/// from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new(names: Vec<String>) -> Result<Self, ValidationError> {
        if names.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateEntry { name: name.clone() });
            }
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name holding the given 1-based ticket number.
    pub fn entry(&self, ticket: usize) -> Option<&str> {
        if ticket == 0 {
            return None;
        }
        self.names.get(ticket - 1).map(String::as_str)
    }
}
