//! Decoder for the ISO-8601 / RFC 3339 text that databases hand back.
//!
//! Both date-based formats scan storage text through here rather than through their own
//! display layouts, so a column written as `2014-04-15T08:00:00.000-07:00` reads back
//! as the same instant.

use crate::constants::{ISO_DATE_FORMAT, ISO_LOCAL_FORMATS, ISO_OFFSET_FORMATS};
use crate::error::FormatError;
use crate::utils::{matches_shape, reject_leap_second, try_parse};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const ISO_DATE_TIME_NAME: &str = "iso date-time";
const ISO_DATE_NAME: &str = "iso date";
const ISO_DATE_SHAPE: &str = "0000-00-00";

#[derive(Debug, Clone, Copy)]
enum IsoLayout {
    Rfc3339,
    Offset(&'static str),
    /// Wall-clock time, read as UTC.
    Local(&'static str),
}

impl IsoLayout {
    fn parse(self, text: &str) -> Result<DateTime<FixedOffset>, FormatError> {
        let parsed = match self {
            IsoLayout::Rfc3339 => DateTime::parse_from_rfc3339(text),
            IsoLayout::Offset(format) => DateTime::parse_from_str(text, format),
            IsoLayout::Local(format) => NaiveDateTime::parse_from_str(text, format)
                .map(|naive| naive.and_utc().fixed_offset()),
        };
        parsed
            .map_err(|err| FormatError::parse(ISO_DATE_TIME_NAME, text, err))
            .and_then(|dt| reject_leap_second(ISO_DATE_TIME_NAME, text, dt))
    }
}

fn iso_layouts() -> Vec<IsoLayout> {
    std::iter::once(IsoLayout::Rfc3339)
        .chain(ISO_OFFSET_FORMATS.iter().copied().map(IsoLayout::Offset))
        .chain(ISO_LOCAL_FORMATS.iter().copied().map(IsoLayout::Local))
        .collect()
}

/// The instant `1970-01-01T00:00:00Z`.
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// Parses ISO date-time text. Empty text is the epoch.
pub fn parse_date_time(text: &str) -> Result<DateTime<FixedOffset>, FormatError> {
    if text.is_empty() {
        return Ok(epoch());
    }
    try_parse(ISO_DATE_TIME_NAME, text, &iso_layouts(), |text, layout| {
        layout.parse(text)
    })
}

/// Parses ISO date or date-time text into a calendar date. Empty text is `None`.
///
/// Date-time text keeps the calendar date of its own offset.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, FormatError> {
    if text.is_empty() {
        return Ok(None);
    }
    let date = if matches_shape(text, ISO_DATE_SHAPE) {
        NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).ok()
    } else {
        None
    };
    match date {
        Some(date) => Ok(Some(date)),
        None => parse_date_time(text)
            .map(|dt| Some(dt.date_naive()))
            .map_err(|err| FormatError::parse(ISO_DATE_NAME, text, err)),
    }
}
