//! Date and time-of-day parsing.
//!
//! Upstream job records carry dates in several shapes: plain ISO dates, full
//! ISO timestamps, and day-first locale strings. This module normalizes them
//! against an explicit, ordered format table. Parsing never fails loudly:
//! anything unparseable comes back as `None`, which every downstream consumer
//! treats as "contributes nothing".
//!
//! ## Date format order
//!
//! The first format that parses wins:
//!
//! 1. `2026-01-12` (plain ISO date)
//! 2. `2026-01-12T08:00:00+02:00` (RFC 3339, date taken as written)
//! 3. `2026-01-12T08:00:00` (naive ISO timestamp, optional fraction)
//! 4. `2026-01-12 08:00:00` (space-separated timestamp, optional fraction)
//! 5. `12/01/2026` (day first)
//! 6. `12-01-2026` (day first)
//! 7. `12.01.2026` (day first)
//! 8. `2026/01/12`
//!
//! Fallback: RFC 2822 (`Mon, 12 Jan 2026 08:00:00 +0000`), date taken as
//! written. No timezone conversion is ever applied to the date component.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// A date representation recognised by [`parse_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `%Y-%m-%d`
    IsoDate,
    /// RFC 3339 timestamp with an offset.
    Rfc3339,
    /// `%Y-%m-%dT%H:%M:%S%.f`
    IsoDateTime,
    /// `%Y-%m-%d %H:%M:%S%.f`
    IsoDateTimeSpaced,
    /// `%d/%m/%Y`
    DayMonthYearSlash,
    /// `%d-%m-%Y`
    DayMonthYearDash,
    /// `%d.%m.%Y`
    DayMonthYearDot,
    /// `%Y/%m/%d`
    YearMonthDaySlash,
    /// RFC 2822 timestamp; only tried after every other format.
    Rfc2822,
}

/// The explicit formats, in the order they are tried.
pub const DATE_FORMATS: [DateFormat; 8] = [
    DateFormat::IsoDate,
    DateFormat::Rfc3339,
    DateFormat::IsoDateTime,
    DateFormat::IsoDateTimeSpaced,
    DateFormat::DayMonthYearSlash,
    DateFormat::DayMonthYearDash,
    DateFormat::DayMonthYearDot,
    DateFormat::YearMonthDaySlash,
];

/// The general-purpose format tried when the table has no match.
pub const FALLBACK_DATE_FORMAT: DateFormat = DateFormat::Rfc2822;

impl DateFormat {
    /// Attempts to parse `raw` as this format, returning the calendar date.
    pub fn parse(self, raw: &str) -> Option<NaiveDate> {
        match self {
            DateFormat::IsoDate => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
            DateFormat::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive()),
            DateFormat::IsoDateTime => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date()),
            DateFormat::IsoDateTimeSpaced => {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            }
            DateFormat::DayMonthYearSlash => NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok(),
            DateFormat::DayMonthYearDash => NaiveDate::parse_from_str(raw, "%d-%m-%Y").ok(),
            DateFormat::DayMonthYearDot => NaiveDate::parse_from_str(raw, "%d.%m.%Y").ok(),
            DateFormat::YearMonthDaySlash => NaiveDate::parse_from_str(raw, "%Y/%m/%d").ok(),
            DateFormat::Rfc2822 => DateTime::parse_from_rfc2822(raw)
                .ok()
                .map(|dt| dt.date_naive()),
        }
    }
}

/// Parses a date and reports which format matched.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{parse_date_with_format, DateFormat};
/// use chrono::NaiveDate;
///
/// let (date, format) = parse_date_with_format("12/01/2026").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(format, DateFormat::DayMonthYearSlash);
/// ```
pub fn parse_date_with_format(raw: &str) -> Option<(NaiveDate, DateFormat)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .chain(std::iter::once(&FALLBACK_DATE_FORMAT))
        .find_map(|format| format.parse(trimmed).map(|date| (date, *format)))
}

/// Parses a date from any supported representation.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(parse_date("2026-01-12"), Some(expected));
/// assert_eq!(parse_date("2026-01-12T23:30:00-05:00"), Some(expected));
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_with_format(raw).map(|(date, _)| date)
}

/// Parses a wall-clock time.
///
/// Surrounding whitespace is trimmed first. Of what remains, only the first
/// five characters (`HH:MM`) are significant, so seconds are accepted and
/// ignored: `" 07:00:30"` reads as 07:00.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("07:30"), NaiveTime::from_hms_opt(7, 30, 0));
/// assert_eq!(parse_time_of_day("07:30:59"), NaiveTime::from_hms_opt(7, 30, 0));
/// assert_eq!(parse_time_of_day(" 07:30:59 "), NaiveTime::from_hms_opt(7, 30, 0));
/// assert_eq!(parse_time_of_day("25:00"), None);
/// ```
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let significant: String = raw.trim().chars().take(5).collect();
    NaiveTime::parse_from_str(&significant, "%H:%M").ok()
}

/// Combines an already-parsed date with an optional time string.
pub fn instant_on(date: NaiveDate, time: Option<&str>) -> Option<NaiveDateTime> {
    time.and_then(parse_time_of_day).map(|t| date.and_time(t))
}

/// Converts a raw `(date, time)` pair into a single orderable instant.
///
/// Returns `None` if either part is absent or unparseable.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::parse_instant;
///
/// let depart = parse_instant("2026-01-12", Some("07:00")).unwrap();
/// let end = parse_instant("12/01/2026", Some("16:00:00")).unwrap();
/// assert_eq!((end - depart).num_minutes(), 540);
///
/// assert!(parse_instant("2026-01-12", None).is_none());
/// assert!(parse_instant("garbage", Some("07:00")).is_none());
/// ```
pub fn parse_instant(date: &str, time: Option<&str>) -> Option<NaiveDateTime> {
    parse_date(date).and_then(|d| instant_on(d, time))
}
