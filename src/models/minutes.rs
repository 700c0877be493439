//! Duration in whole minutes, rendered as `HH:MM:SS`.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Minutes(u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub fn new(mins: u32) -> Self {
        Self(mins)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Minutes {
    /// Hours are not wrapped at 24: 1500 minutes render as `25:00:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:00", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for Minutes {
    type Err = AppError;

    /// Accepts `H+:MM:SS`, `H+:MM` and the legacy `1h30m0s` style.
    fn from_str(s: &str) -> AppResult<Self> {
        let t = s.trim();
        if t.is_empty() {
            return Err(AppError::InvalidDuration(s.to_string()));
        }

        if t.contains(':') {
            parse_clock(t).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
        } else {
            parse_legacy(t).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
        }
    }
}

fn parse_clock(t: &str) -> Option<Minutes> {
    let parts: Vec<&str> = t.split(':').collect();
    let (h, m, sec) = match parts.as_slice() {
        [h, m] => (*h, *m, "00"),
        [h, m, sec] => (*h, *m, *sec),
        _ => return None,
    };

    let hours = digits(h)?;
    let minutes = digits(m)?;
    let seconds = digits(sec)?;

    if m.len() > 2 || sec.len() > 2 || minutes >= 60 || seconds >= 60 {
        return None;
    }
    // niente secondi: solo minuti interi
    if seconds != 0 {
        return None;
    }

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .map(Minutes)
}

fn parse_legacy(t: &str) -> Option<Minutes> {
    let d = humantime::parse_duration(t).ok()?;
    if d.subsec_nanos() != 0 || d.as_secs() % 60 != 0 {
        return None;
    }
    u32::try_from(d.as_secs() / 60).ok().map(Minutes)
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Minutes {
    fn add_assign(&mut self, rhs: Minutes) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Minutes {
        iter.fold(Minutes::ZERO, Add::add)
    }
}
