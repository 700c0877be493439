//! Calendar date without time-of-day, plus the month partition key.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// English month name, e.g. "January".
    pub fn month_name(&self) -> String {
        self.0.format("%B").to_string()
    }

    /// Name of the monthly sheet holding this date: `"<MonthName> <Year>"`.
    pub fn partition_name(&self) -> String {
        format!("{} {}", self.month_name(), self.year())
    }

    /// First day of the month, used to order partitions chronologically.
    pub fn month_start(&self) -> LocalDate {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn checked_sub(&self, window: Duration) -> Option<LocalDate> {
        self.0.checked_sub_signed(window).map(Self)
    }

    /// Inverse of [`partition_name`](Self::partition_name): "March 2024" → 2024-03-01.
    pub fn from_partition_name(name: &str) -> Option<LocalDate> {
        NaiveDate::parse_from_str(&format!("01 {}", name.trim()), "%d %B %Y")
            .ok()
            .map(Self)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for LocalDate {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}
