//! Identifier newtypes for time entries and their foreign keys.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote identifier of a time entry. Never zero: a row without an id is
/// modelled as `Option::<TimeEntryId>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeEntryId(u64);

impl TimeEntryId {
    pub fn new(id: u64) -> Option<Self> {
        (id != 0).then_some(Self(id))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parse the hidden id cell: blank (or "0") means "not created yet".
    pub fn parse_cell(s: &str) -> AppResult<Option<Self>> {
        let t = s.trim();
        if t.is_empty() {
            return Ok(None);
        }
        let id = parse_u64(t)?;
        Ok(Self::new(id))
    }
}

impl fmt::Display for TimeEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Foreign key into the Projects lookup table. `0` = unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

/// Foreign key into the Services lookup table. `0` = unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ServiceId(pub u64);

impl ProjectId {
    pub fn is_resolved(&self) -> bool {
        self.0 >= 1
    }
}

impl ServiceId {
    pub fn is_resolved(&self) -> bool {
        self.0 >= 1
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strict decimal parsing: no sign, no spaces, digits only.
pub(crate) fn parse_u64(s: &str) -> AppResult<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidId(s.to_string()));
    }
    s.parse::<u64>()
        .map_err(|_| AppError::InvalidId(s.to_string()))
}
