// src/timesheet/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial of 1901-01-01. Anything earlier sits on the 1899/1900 epoch and is
/// a time of day (possibly 24h or more), not a calendar date.
const FIRST_SERIAL_AFTER_EPOCH_YEAR: f64 = 367.0;

/// Render an Excel serial value the way the timesheet writes its cells.
///
/// Excel turns what a user types into numbers: `2024-01-05` becomes a date
/// serial, `01:30` a fraction of a day. We convert them back to our canonical
/// text so the codec only ever parses strings:
/// - whole serial           → `YYYY-MM-DD`
/// - serial on the epoch    → `H+:MM:SS` (hours not wrapped)
/// - duration cells         → `H+:MM:SS`
/// - anything else          → `YYYY-MM-DD HH:MM:SS`
/// - out of range           → the raw number, left for the codec to reject
pub(crate) fn serial_to_text(serial: f64, is_duration: bool) -> String {
    if !serial.is_finite() {
        return serial.to_string();
    }
    if is_duration || (0.0..FIRST_SERIAL_AFTER_EPOCH_YEAR).contains(&serial) {
        return clock_from_seconds(round_seconds(serial * SECONDS_PER_DAY));
    }

    match serial_to_datetime(serial) {
        Some(dt) if dt.time() == chrono::NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}

fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    if serial.abs() >= i64::MAX as f64 {
        return None;
    }
    let days = serial.trunc() as i64;
    let secs = round_seconds(serial.fract() * SECONDS_PER_DAY);

    excel_epoch
        .checked_add_signed(TimeDelta::try_days(days)?)?
        .checked_add_signed(TimeDelta::try_seconds(secs)?)
}

fn round_seconds(v: f64) -> i64 {
    v.round() as i64
}

fn clock_from_seconds(total: i64) -> String {
    let total = total.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
