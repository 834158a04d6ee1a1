use crate::constants::{
    ISO_DATE_FORMAT, US_DATE_FORMAT, US_DATE_LAYOUTS, US_DATE_NAME, US_DATE_SENTINELS,
};
use crate::error::FormatError;
use crate::formats::iso;
use crate::formats::traits::ScalarFormat;
use crate::registry::FormatRegistry;
use crate::storage::{DriverValue, Scanner, Valuer};
use crate::utils::{matches_shape, try_parse};
use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar date written as `MM/DD/YYYY`.
///
/// Reads `MM/DD/YYYY` or `YYYY-MM-DD`, stores as `YYYY-MM-DD`. The sentinels
/// `0000-00-00` and `00/00/0000` stand for "no date" and leave the value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsDate(NaiveDate);

impl UsDate {
    pub fn new(date: NaiveDate) -> Self {
        UsDate(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parses text into a date, or `None` for empty text and sentinels.
    pub fn parse_opt(text: &str) -> Result<Option<UsDate>, FormatError> {
        if text.is_empty() || is_sentinel(text) {
            return Ok(None);
        }
        parse_naive_date(text).map(|date| Some(UsDate(date)))
    }
}

impl From<NaiveDate> for UsDate {
    fn from(date: NaiveDate) -> Self {
        UsDate(date)
    }
}

impl From<UsDate> for NaiveDate {
    fn from(date: UsDate) -> Self {
        date.0
    }
}

fn is_sentinel(text: &str) -> bool {
    US_DATE_SENTINELS.contains(&text)
}

/// Parses one `(chrono format, shape)` date layout. Calendar correctness is left to chrono.
pub(crate) fn parse_date_layout(
    text: &str,
    (format, shape): (&str, &str),
) -> Result<NaiveDate, FormatError> {
    if !matches_shape(text, shape) {
        return Err(FormatError::parse(
            US_DATE_NAME,
            text,
            format!("does not have the shape {shape}"),
        ));
    }
    NaiveDate::parse_from_str(text, format).map_err(|err| FormatError::parse(US_DATE_NAME, text, err))
}

/// Parses `MM/DD/YYYY`, then `YYYY-MM-DD`.
pub(crate) fn parse_naive_date(text: &str) -> Result<NaiveDate, FormatError> {
    try_parse(US_DATE_NAME, text, US_DATE_LAYOUTS, |text, layout| {
        parse_date_layout(text, *layout)
    })
}

pub fn is_us_date(text: &str) -> bool {
    is_sentinel(text) || parse_naive_date(text).is_ok()
}

pub fn register_into(registry: &mut FormatRegistry) -> bool {
    registry.add::<UsDate>(US_DATE_NAME, is_us_date)
}

impl ScalarFormat for UsDate {
    const NAME: &'static str = US_DATE_NAME;

    fn validate(text: &str) -> bool {
        is_us_date(text)
    }

    fn parse(text: &str) -> Result<Self, FormatError> {
        UsDate::parse_opt(text).map(Option::unwrap_or_default)
    }

    /// Empty text and sentinels leave the slot as it was.
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), FormatError> {
        let text =
            std::str::from_utf8(text).map_err(|_| FormatError::InvalidUtf8 { format: Self::NAME })?;
        if let Some(date) = UsDate::parse_opt(text)? {
            *self = date;
        }
        Ok(())
    }
}

impl FromStr for UsDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsDate::parse(s)
    }
}

impl fmt::Display for UsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(US_DATE_FORMAT))
    }
}

impl Scanner for UsDate {
    fn scan(&mut self, raw: DriverValue) -> Result<(), FormatError> {
        match raw {
            DriverValue::Null => *self = UsDate::default(),
            DriverValue::Bytes(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| FormatError::InvalidUtf8 { format: Self::NAME })?;
                *self = iso::parse_date(&text)?.map(UsDate).unwrap_or_default();
            }
            DriverValue::Text(text) => {
                *self = iso::parse_date(&text)?.map(UsDate).unwrap_or_default();
            }
            DriverValue::Timestamp(dt) => *self = UsDate(dt.date_naive()),
            other => {
                return Err(FormatError::UnsupportedScanSource {
                    format: Self::NAME,
                    source_type: other.type_name(),
                });
            }
        }
        Ok(())
    }
}

impl Valuer for UsDate {
    fn value(&self) -> Result<DriverValue, FormatError> {
        Ok(DriverValue::Text(self.0.format(ISO_DATE_FORMAT).to_string()))
    }
}

impl Serialize for UsDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct UsDateVisitor;

impl<'de> Visitor<'de> for UsDateVisitor {
    type Value = UsDate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a date as MM/DD/YYYY or YYYY-MM-DD")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        // Loose APIs send 0000-00-00 for "no date".
        if v == "0000-00-00" {
            return Ok(UsDate::default());
        }
        parse_naive_date(v).map(UsDate).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for UsDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(UsDateVisitor)
    }
}
