//! Long-form date formatting.
//!
//! Listings, bookings, and receipts all show dates the same way: long
//! month name, numeric day, numeric year (`"January 5, 2024"`). The
//! rendering goes through ICU4X so the month names and ordering come from
//! real locale data rather than a hand-maintained table.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::DISPLAY_LOCALE;

/// Sentinel shown when a date string cannot be parsed.
///
/// Unparseable input is a render-time condition, not a failure: screens
/// show this marker instead of aborting the render, matching how calendar
/// UIs degrade.
pub const INVALID_DATE: &str = "Invalid Date";

/// A value [`format_date`] accepts: an already-constructed date, an
/// instant, or raw text still to be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A plain calendar date.
    Day(NaiveDate),
    /// An instant with an offset; only its calendar date is displayed.
    Timestamp(DateTime<FixedOffset>),
    /// Raw text, parsed as RFC 3339 or an ISO-like date.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Day(date)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Timestamp(instant.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(instant)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Format a date for display: long month, numeric day, numeric year.
///
/// Accepts anything convertible to [`DateInput`]. Text input is parsed as
/// RFC 3339 (`2024-01-05T10:30:00Z`), a bare ISO datetime
/// (`2024-01-05T10:30:00`), or a bare date (`2024-01-05`); if none of
/// those match, the result is the [`INVALID_DATE`] sentinel rather than an
/// error.
///
/// Inputs carrying a UTC offset are displayed as the calendar date written
/// in the input. No conversion through a process-local timezone happens,
/// so the same input always yields the same string on every machine.
///
/// # Example
///
/// ```
/// use atrium_format::{format_date, INVALID_DATE};
///
/// assert_eq!(format_date("2024-01-05"), "January 5, 2024");
/// assert_eq!(format_date("2024-01-05T08:15:00Z"), "January 5, 2024");
/// assert_eq!(format_date("not a date"), INVALID_DATE);
/// ```
pub fn format_date(input: impl Into<DateInput>) -> String {
    let date = match input.into() {
        DateInput::Day(date) => date,
        DateInput::Timestamp(instant) => instant.date_naive(),
        DateInput::Text(text) => match parse_date_text(&text) {
            Some(date) => date,
            None => {
                warn!(input = %text, "unparseable date input, showing sentinel");
                return INVALID_DATE.to_string();
            }
        },
    };

    render_long(date)
}

/// Parse ISO-like date text into a calendar date.
///
/// Offsets are kept as written; the calendar components are used directly.
fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Render a calendar date in the long `en-US` form through ICU4X.
fn render_long(date: NaiveDate) -> String {
    use chrono::Datelike;
    use icu::calendar::Date;
    use icu::datetime::fieldsets;
    use icu::datetime::DateTimeFormatter;
    use icu::locale::Locale;

    let year = date.year();
    let month = date.month() as u8;
    let day = date.day() as u8;

    let icu_date = match Date::try_new_iso(year, month, day) {
        Ok(d) => d,
        Err(_) => return fallback_long(date),
    };

    let locale: Locale = DISPLAY_LOCALE
        .parse()
        .expect("display locale literal is well-formed");

    DateTimeFormatter::try_new(locale.into(), fieldsets::YMD::long())
        .ok()
        .map(|formatter| formatter.format(&icu_date).to_string())
        .unwrap_or_else(|| fallback_long(date))
}

/// Chrono-based rendering used when ICU formatter construction fails.
fn fallback_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
