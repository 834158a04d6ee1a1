use crate::error::FormatError;
use chrono::offset::LocalResult;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use chrono_tz::Tz;
use log::{debug, warn};
use std::fmt::Debug;

/// Tries each layout in order and returns the first success.
///
/// When every layout fails, the error of the last attempt is returned.
pub(crate) fn try_parse<L, T, F>(
    format: &'static str,
    text: &str,
    layouts: &[L],
    parser: F,
) -> Result<T, FormatError>
where
    L: Debug,
    F: Fn(&str, &L) -> Result<T, FormatError>,
{
    let mut last_error = None;
    for layout in layouts {
        match parser(text, layout) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!("Failed to parse {text} with {layout:?}");
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| FormatError::parse(format, text, "no layouts to try")))
}

/// Rejects chrono leap seconds, which `%S` and RFC 3339 accept as second `60`.
pub(crate) fn reject_leap_second<T: Timelike>(
    format: &'static str,
    text: &str,
    value: T,
) -> Result<T, FormatError> {
    if value.nanosecond() >= 1_000_000_000 {
        return Err(FormatError::parse(format, text, "second out of range"));
    }
    Ok(value)
}

/// Checks that `text` has exactly the layout of `shape`, where `0` in the shape is any ASCII digit.
pub(crate) fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text
            .bytes()
            .zip(shape.bytes())
            .all(|(t, s)| if s == b'0' { t.is_ascii_digit() } else { t == s })
}

/// Places a wall-clock time into `zone`.
///
/// Ambiguous times pick the earlier instant. Times inside a DST gap are moved one hour forward.
pub(crate) fn resolve_local(zone: Tz, naive: NaiveDateTime) -> DateTime<FixedOffset> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.fixed_offset(),
        LocalResult::Ambiguous(a, b) => {
            warn!("Local time {naive} is ambiguous in {zone}, picking the earliest instant.");
            a.min(b).fixed_offset()
        }
        LocalResult::None => {
            warn!("Local time {naive} does not exist in {zone}, moving it one hour forward.");
            naive
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| zone.from_local_datetime(&shifted).earliest())
                .unwrap_or_else(|| zone.from_utc_datetime(&naive))
                .fixed_offset()
        }
    }
}
