use chrono::{Datelike, NaiveDate};

use crate::error::{AppError, Result};

/// First day of the month `today` falls in; the floor for attendance logging.
pub fn first_of_current_month(today: NaiveDate) -> NaiveDate {
    // with_day(1) cannot fail for day 1
    today.with_day(1).unwrap_or(today)
}

/// Historical locking: attendance may only be logged for the current
/// calendar month onward. Earlier dates are refused outright, never clamped.
pub fn ensure_loggable(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < first_of_current_month(today) {
        return Err(AppError::policy_denied(format!(
            "log date {date} falls before the current month (historical locking)"
        )));
    }
    Ok(())
}

pub fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(AppError::validation(format!(
            "month {month} is out of range (1-12)"
        )));
    }
    Ok(())
}
