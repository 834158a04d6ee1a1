//! US date-time format, e.g. `04/15/2014 08:00am`.
//!
//! Input is read as wall-clock time in one zone, US Pacific unless told otherwise, and kept
//! as a fixed-offset instant so that rendering reproduces the same wall-clock text.
//!
//! Two distinct "empty" values exist:
//! - the zero value ([`UsDateTime::default`]), produced by scanning a NULL column;
//! - the sentinel ([`UsDateTime::sentinel`], the Unix epoch), produced by parsing `""` or
//!   one of the `0000-00-00` style placeholders.
//!
//! Both render as `""` and store as NULL.

use crate::constants::{
    ALT_US_DATE_LAYOUT, ALT_US_DATE_TIME_FORMAT, ALT_US_DATE_TIME_SHAPE, US_DATE_CLOCK_SHAPE,
    US_DATE_LAYOUT, US_DATE_MIXED_TIME_FORMAT, US_DATE_TIME_FORMAT, US_DATE_TIME_NAME,
    US_DATE_TIME_SENTINELS,
};
use crate::error::FormatError;
use crate::formats::iso;
use crate::formats::traits::{AnyFormat, ScalarFormat};
use crate::formats::us_date::{is_us_date, parse_date_layout};
use crate::registry::FormatRegistry;
use crate::storage::{DriverValue, Scanner, Valuer};
use crate::utils::{matches_shape, reject_leap_second, resolve_local, try_parse};
use crate::validation::is_time_of_day;
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_ZONE: Tz = chrono_tz::America::Los_Angeles;

/// Storage rendering with millisecond precision, e.g. `2014-04-15T08:00:00.000-07:00`.
const ISO_MILLIS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

fn split_meridiem(text: &str) -> Result<(&str, Meridiem), FormatError> {
    text.strip_suffix("am")
        .map(|body| (body, Meridiem::Am))
        .or_else(|| text.strip_suffix("pm").map(|body| (body, Meridiem::Pm)))
        .ok_or_else(|| FormatError::parse(US_DATE_TIME_NAME, text, "missing am/pm marker"))
}

fn check_shape(text: &str, body: &str, shape: &str) -> Result<(), FormatError> {
    if matches_shape(body, shape) {
        Ok(())
    } else {
        Err(FormatError::parse(
            US_DATE_TIME_NAME,
            text,
            format!("does not have the shape {shape}"),
        ))
    }
}

#[derive(Debug, Clone, Copy)]
enum DateTimeLayout {
    /// `MM/DD/YYYY hh:mmam`
    Clock12,
    /// `YYYY-MM-DD HH:MM:SS`
    Iso24,
    /// `MM/DD/YYYY` at midnight
    UsDateOnly,
    /// `YYYY-MM-DD` at midnight
    IsoDateOnly,
    /// `MM/DD/YYYY HH:MMpm`, a 24-hour clock that still carries a marker
    Mixed24,
}

const DATE_TIME_LAYOUTS: [DateTimeLayout; 5] = [
    DateTimeLayout::Clock12,
    DateTimeLayout::Iso24,
    DateTimeLayout::UsDateOnly,
    DateTimeLayout::IsoDateOnly,
    DateTimeLayout::Mixed24,
];

impl DateTimeLayout {
    fn parse_naive(self, text: &str) -> Result<NaiveDateTime, FormatError> {
        let chrono_err = |err: chrono::ParseError| FormatError::parse(US_DATE_TIME_NAME, text, err);
        match self {
            DateTimeLayout::Clock12 => {
                let (body, _) = split_meridiem(text)?;
                check_shape(text, body, US_DATE_CLOCK_SHAPE)?;
                NaiveDateTime::parse_from_str(text, US_DATE_TIME_FORMAT).map_err(chrono_err)
            }
            DateTimeLayout::Iso24 => {
                check_shape(text, text, ALT_US_DATE_TIME_SHAPE)?;
                NaiveDateTime::parse_from_str(text, ALT_US_DATE_TIME_FORMAT)
                    .map_err(chrono_err)
                    .and_then(|naive| reject_leap_second(US_DATE_TIME_NAME, text, naive))
            }
            DateTimeLayout::UsDateOnly => {
                parse_date_layout(text, US_DATE_LAYOUT).map(|date| date.and_time(NaiveTime::MIN))
            }
            DateTimeLayout::IsoDateOnly => parse_date_layout(text, ALT_US_DATE_LAYOUT)
                .map(|date| date.and_time(NaiveTime::MIN)),
            DateTimeLayout::Mixed24 => {
                let (body, meridiem) = split_meridiem(text)?;
                check_shape(text, body, US_DATE_CLOCK_SHAPE)?;
                let naive = NaiveDateTime::parse_from_str(body, US_DATE_MIXED_TIME_FORMAT)
                    .map_err(chrono_err)?;
                let hour = match (meridiem, naive.hour()) {
                    (Meridiem::Pm, hour) if hour < 12 => hour + 12,
                    (Meridiem::Am, 12) => 0,
                    (_, hour) => hour,
                };
                Ok(naive.with_hour(hour).unwrap_or(naive))
            }
        }
    }
}

/// A date-time read as US wall-clock text in a fixed zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UsDateTime(Option<DateTime<FixedOffset>>);

impl UsDateTime {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        UsDateTime(Some(instant))
    }

    /// The "no time recorded" value: the Unix epoch in UTC.
    pub fn sentinel() -> Self {
        UsDateTime(Some(iso::epoch()))
    }

    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        self.0
    }

    /// True for the zero value only, not for the sentinel.
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_sentinel(&self) -> bool {
        self.0.is_some_and(|dt| dt.timestamp() == 0)
    }

    /// True when the value renders as `""`.
    pub fn is_empty(&self) -> bool {
        self.is_zero() || self.is_sentinel()
    }

    /// Parses text as wall-clock time in `zone`.
    pub fn parse_in(text: &str, zone: Tz) -> Result<Self, FormatError> {
        if US_DATE_TIME_SENTINELS.contains(&text) {
            return Ok(UsDateTime::sentinel());
        }
        try_parse(US_DATE_TIME_NAME, text, &DATE_TIME_LAYOUTS, |text, layout| {
            layout.parse_naive(text)
        })
        .map(|naive| UsDateTime::new(resolve_local(zone, naive)))
    }

    /// Renders the instant with millisecond precision and its offset, or `None` when empty.
    pub fn to_iso_string(&self) -> Option<String> {
        self.non_empty()
            .map(|dt| dt.format(ISO_MILLIS_FORMAT).to_string())
    }

    fn non_empty(&self) -> Option<DateTime<FixedOffset>> {
        self.0.filter(|_| !self.is_empty())
    }
}

impl From<DateTime<FixedOffset>> for UsDateTime {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        UsDateTime::new(instant)
    }
}

pub fn is_us_date_time(text: &str) -> bool {
    if text.len() < 4 {
        return false;
    }
    match text.split_once(' ') {
        None => is_us_date(text),
        Some((date, time)) => is_us_date(date) && is_time_of_day(time),
    }
}

/// Registers the format with a parser bound to `zone`.
pub fn register_into(registry: &mut FormatRegistry, zone: Tz) -> bool {
    registry.add_with_parser(
        US_DATE_TIME_NAME,
        UsDateTime::NAME,
        is_us_date_time,
        Arc::new(move |text: &str| -> Result<Box<dyn AnyFormat>, FormatError> {
            Ok(Box::new(UsDateTime::parse_in(text, zone)?))
        }),
    )
}

impl ScalarFormat for UsDateTime {
    const NAME: &'static str = US_DATE_TIME_NAME;

    fn validate(text: &str) -> bool {
        is_us_date_time(text)
    }

    fn parse(text: &str) -> Result<Self, FormatError> {
        UsDateTime::parse_in(text, DEFAULT_ZONE)
    }
}

impl FromStr for UsDateTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsDateTime::parse(s)
    }
}

impl fmt::Display for UsDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.non_empty() {
            Some(dt) => write!(f, "{}", dt.format(US_DATE_TIME_FORMAT)),
            None => Ok(()),
        }
    }
}

impl Scanner for UsDateTime {
    fn scan(&mut self, raw: DriverValue) -> Result<(), FormatError> {
        match raw {
            DriverValue::Null => *self = UsDateTime::default(),
            DriverValue::Bytes(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| FormatError::InvalidUtf8 { format: Self::NAME })?;
                *self = UsDateTime::new(iso::parse_date_time(&text)?);
            }
            DriverValue::Text(text) => *self = UsDateTime::new(iso::parse_date_time(&text)?),
            DriverValue::Timestamp(dt) => *self = UsDateTime::new(dt),
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

impl Valuer for UsDateTime {
    fn value(&self) -> Result<DriverValue, FormatError> {
        Ok(self.non_empty().into())
    }
}

impl Serialize for UsDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

struct UsDateTimeVisitor;

impl<'de> Visitor<'de> for UsDateTimeVisitor {
    type Value = UsDateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a US date-time string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        UsDateTime::parse(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(UsDateTime::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(UsDateTime::default())
    }
}

impl<'de> Deserialize<'de> for UsDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UsDateTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct UsCase {
        input: &'static str,
        time: DateTime<FixedOffset>,
        db: &'static str,
        rendered: &'static str,
    }

    fn pst(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        DEFAULT_ZONE
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .fixed_offset()
    }

    fn us_cases() -> Vec<UsCase> {
        vec![
            UsCase {
                input: "04/15/2014 08:00am",
                time: pst(2014, 4, 15, 8, 0),
                db: "2014-04-15T08:00:00.000-07:00",
                rendered: "04/15/2014 08:00am",
            },
            UsCase {
                input: "08/18/2011 07:03pm",
                time: pst(2011, 8, 18, 19, 3),
                db: "2011-08-18T19:03:00.000-07:00",
                rendered: "08/18/2011 07:03pm",
            },
            UsCase {
                input: "12/05/2014 07:30pm",
                time: pst(2014, 12, 5, 19, 30),
                db: "2014-12-05T19:30:00.000-08:00",
                rendered: "12/05/2014 07:30pm",
            },
            UsCase {
                input: "2014-12-05 19:30:00",
                time: pst(2014, 12, 5, 19, 30),
                db: "2014-12-05T19:30:00.000-08:00",
                rendered: "12/05/2014 07:30pm",
            },
            UsCase {
                input: "01/01/2001",
                time: pst(2001, 1, 1, 0, 0),
                db: "2001-01-01T00:00:00.000-08:00",
                rendered: "01/01/2001 12:00am",
            },
            UsCase {
                input: "2001-01-01",
                time: pst(2001, 1, 1, 0, 0),
                db: "2001-01-01T00:00:00.000-08:00",
                rendered: "01/01/2001 12:00am",
            },
        ]
    }

    #[rstest]
    fn test_full_cycle() {
        for (case_num, example) in us_cases().iter().enumerate() {
            let parsed = UsDateTime::parse(example.input).unwrap();
            assert_eq!(parsed.instant(), Some(example.time), "case #{case_num}");
            assert_eq!(parsed.to_string(), example.rendered, "case #{case_num}");
            assert_eq!(parsed.to_iso_string().as_deref(), Some(example.db));
            assert!(UsDateTime::validate(example.input), "{}", example.input);

            let mut scanned = UsDateTime::sentinel();
            scanned.scan(DriverValue::from(example.db.as_bytes())).unwrap();
            assert_eq!(scanned, parsed, "case #{case_num}");
            assert_eq!(scanned.to_string(), example.rendered);
        }
    }

    #[rstest]
    fn test_value() {
        for example in us_cases() {
            let parsed = UsDateTime::parse(example.input).unwrap();
            assert_eq!(parsed.value().unwrap(), DriverValue::Timestamp(example.time));
        }
    }

    #[rstest]
    fn test_json() {
        for example in us_cases() {
            let dt = UsDateTime::new(example.time);
            let json = dt.to_json().unwrap();
            assert_eq!(json, format!("\"{}\"", example.rendered).into_bytes());

            let decoded = UsDateTime::from_json(format!("\"{}\"", example.input).as_bytes()).unwrap();
            assert_eq!(decoded, dt);
        }
    }

    #[rstest]
    fn test_json_empty_values() {
        assert_eq!(UsDateTime::sentinel().to_json().unwrap(), b"null".to_vec());
        assert_eq!(UsDateTime::default().to_json().unwrap(), b"null".to_vec());
        assert_eq!(UsDateTime::from_json(b"null").unwrap(), UsDateTime::default());
        assert_eq!(UsDateTime::from_json(br#""""#).unwrap(), UsDateTime::sentinel());
    }

    #[rstest]
    #[case("zorg emperor")]
    #[case(r#""zorg emperor""#)]
    #[case("42")]
    fn test_json_errors(#[case] json: &str) {
        assert!(matches!(
            UsDateTime::from_json(json.as_bytes()),
            Err(FormatError::JsonDecode(_))
        ));
    }

    #[rstest]
    #[case("")]
    #[case("0000-00-00 00:00:00")]
    #[case("0000-00-00")]
    #[case("00/00/0000")]
    fn test_sentinel_inputs(#[case] text: &str) {
        let parsed = UsDateTime::parse(text).unwrap();
        assert!(parsed.is_sentinel());
        assert!(!parsed.is_zero());
        assert_eq!(parsed, UsDateTime::sentinel());
        assert_eq!(parsed.to_string(), "");
        assert_eq!(parsed.value().unwrap(), DriverValue::Null);
        assert_eq!(parsed.to_iso_string(), None);
    }

    #[rstest]
    fn test_empty_text_parses_but_does_not_validate() {
        assert!(!UsDateTime::validate(""));
        assert_eq!(UsDateTime::parse("").unwrap(), UsDateTime::sentinel());
    }

    #[rstest]
    fn test_sentinel_is_epoch() {
        assert_eq!(UsDateTime::sentinel().instant(), Some(iso::epoch()));
        assert_eq!(UsDateTime::default().instant(), None);
        assert_eq!(UsDateTime::default().to_string(), "");
        assert_eq!(UsDateTime::default().value().unwrap(), DriverValue::Null);
    }

    #[rstest]
    #[case("12/05/2014 19:30pm", pst(2014, 12, 5, 19, 30))]
    #[case("12/05/2014 07:30pm", pst(2014, 12, 5, 19, 30))]
    #[case("12/05/2014 12:15am", pst(2014, 12, 5, 0, 15))]
    #[case("12/05/2014 00:15am", pst(2014, 12, 5, 0, 15))]
    #[case("12/05/2014 12:15pm", pst(2014, 12, 5, 12, 15))]
    fn test_clock_layouts(#[case] text: &str, #[case] expected: DateTime<FixedOffset>) {
        assert_eq!(UsDateTime::parse(text).unwrap().instant(), Some(expected));
    }

    #[rstest]
    #[case("yada")]
    #[case("04/15/2014 08:00AM")]
    #[case("4/15/2014 08:00am")]
    #[case("04/15/2014 8:00am")]
    #[case("2014-04-15T08:00:00")]
    #[case("02/29/2017 08:00am")]
    #[case("1972-12-31 23:59:60")]
    #[case("2014-12-05 10:30:60")]
    fn test_parse_errors(#[case] text: &str) {
        assert!(UsDateTime::parse(text).is_err());
    }

    #[rstest]
    fn test_parse_error_comes_from_last_layout() {
        match UsDateTime::parse("yada").unwrap_err() {
            FormatError::Parse { reason, .. } => assert_eq!(reason, "missing am/pm marker"),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[rstest]
    fn test_parse_in_other_zone() {
        let parsed = UsDateTime::parse_in("04/15/2014 08:00am", chrono_tz::America::New_York).unwrap();
        assert_eq!(parsed.to_iso_string().as_deref(), Some("2014-04-15T08:00:00.000-04:00"));
        assert_eq!(parsed.to_string(), "04/15/2014 08:00am");
    }

    #[rstest]
    #[case("zor", false)]
    #[case("zorg", false)]
    #[case("zorgTx", false)]
    #[case("1972-12-31Tx", false)]
    #[case("1972-12-31T24:40:00.000Z", false)]
    #[case("1972-12-31T23:63:00.000Z", false)]
    #[case("1972-12-31T23:59:60.000Z", false)]
    #[case("1972-12-31 24:40:00", false)]
    #[case("1972-12-31 23:63:00", false)]
    #[case("1972-12-31 23:59:60", false)]
    #[case("12/31/1972 13:00pm", false)]
    #[case("02/29/2017 08:00am", false)]
    #[case("12/31/1972 11:00pm", true)]
    #[case("12/31/1972 11:00pm PST", true)]
    #[case("1972-12-31 23:59:59", true)]
    #[case("1972-12-31", true)]
    #[case("0000-00-00 00:00:00", true)]
    #[case("00/00/0000", true)]
    fn test_is_us_date_time(#[case] text: &str, #[case] valid: bool) {
        assert_eq!(UsDateTime::validate(text), valid, "value [{text}]");
    }

    #[rstest]
    #[case("04/15/2014 08:00am")]
    #[case("2014-12-05 19:30:00")]
    #[case("01/01/2001")]
    #[case("2001-01-01")]
    #[case("0000-00-00 00:00:00")]
    #[case("0000-00-00")]
    #[case("00/00/0000")]
    #[case("1972-12-31 24:40:00")]
    #[case("02/29/2017 08:00am")]
    #[case("04/15/2014 08:00AM")]
    #[case("1972-12-31 23:59:60")]
    #[case("2014-12-05 10:30:60")]
    #[case("zorg")]
    fn test_validate_agrees_with_parse(#[case] text: &str) {
        assert_eq!(UsDateTime::validate(text), UsDateTime::parse(text).is_ok());
    }

    #[rstest]
    fn test_unmarshal_text() {
        let mut pp = UsDateTime::sentinel();
        pp.unmarshal_text(b"04/15/2014 08:00am").unwrap();
        assert_eq!(pp.instant(), Some(pst(2014, 4, 15, 8, 0)));
        assert_eq!(pp.marshal_text(), b"04/15/2014 08:00am".to_vec());

        assert!(pp.unmarshal_text(b"yada").is_err());
        assert_eq!(pp.instant(), Some(pst(2014, 4, 15, 8, 0)));

        pp.unmarshal_text(b"").unwrap();
        assert!(pp.is_sentinel());
    }

    #[rstest]
    fn test_scan() {
        for example in us_cases() {
            for raw in [
                DriverValue::from(example.db),
                DriverValue::from(example.db.as_bytes()),
                DriverValue::Timestamp(example.time),
            ] {
                let mut pp = UsDateTime::sentinel();
                pp.scan(raw).unwrap();
                assert_eq!(pp.to_iso_string().as_deref(), Some(example.db));
            }
        }
    }

    #[rstest]
    fn test_scan_empty_values() {
        let mut pp = UsDateTime::sentinel();
        pp.scan(DriverValue::Null).unwrap();
        assert!(pp.is_zero());
        assert_ne!(pp, UsDateTime::sentinel());

        pp.scan(DriverValue::from("")).unwrap();
        assert_eq!(pp, UsDateTime::sentinel());
    }

    #[rstest]
    #[case(DriverValue::Int64(0))]
    #[case(DriverValue::Float64(0.0))]
    #[case(DriverValue::Bool(true))]
    fn test_scan_unsupported(#[case] raw: DriverValue) {
        let mut pp = UsDateTime::sentinel();
        assert!(matches!(
            pp.scan(raw),
            Err(FormatError::UnsupportedScanSource { .. })
        ));
        assert!(pp.is_sentinel());
    }
}
