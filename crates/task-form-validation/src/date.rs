// File: src/date.rs
// Purpose: DD/MM/YYYY parsing and the future-date predicate

use chrono::{Days, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Day 01-31, month 01-12, four ASCII-digit year. Month lengths are not checked here.
pub const DUE_DATE_PATTERN: &str = r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/[0-9]{4}$";

pub(crate) static DUE_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DUE_DATE_PATTERN).expect("due date pattern is a valid regex"));

/// How a day that does not exist in its month (e.g. `31/02/2025`) is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarPolicy {
    /// Extra days roll into the following month: `31/02/2025` is `03/03/2025`
    #[default]
    Rollover,
    /// The date is rejected as malformed
    Strict,
}

/// Parse a `DD/MM/YYYY` string into a calendar date
///
/// Returns `None` if the text does not split into three numbers, or if the
/// day does not exist in its month under [`CalendarPolicy::Strict`].
pub fn parse_due_date(text: &str, policy: CalendarPolicy) -> Option<NaiveDate> {
    let mut parts = text.split('/').map(|part| part.parse::<u32>().ok());
    let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Some(day)), Some(Some(month)), Some(Some(year)), None) => (day, month, year),
        _ => return None,
    };
    let year = i32::try_from(year).ok()?;

    match policy {
        CalendarPolicy::Strict => NaiveDate::from_ymd_opt(year, month, day),
        CalendarPolicy::Rollover => {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            first.checked_add_days(Days::new(u64::from(day.checked_sub(1)?)))
        }
    }
}

/// A due date is acceptable when it is today or later
pub fn is_not_past(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Current local calendar date
///
/// Capture this once per validation pass and pass it down.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
