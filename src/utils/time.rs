//! Look-back window parsing ("4w", "14d", "2weeks").

use crate::errors::{AppError, AppResult};
use chrono::Duration;

pub fn parse_window(s: &str) -> AppResult<Duration> {
    let parsed = humantime::parse_duration(s.trim()).map_err(|_| AppError::InvalidWindow(s.to_string()))?;
    if parsed.is_zero() {
        return Err(AppError::InvalidWindow(s.to_string()));
    }
    Duration::from_std(parsed).map_err(|_| AppError::InvalidWindow(s.to_string()))
}
