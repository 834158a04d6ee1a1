pub const BOOL_STRING_NAME: &str = "boolstring";
pub const US_DATE_NAME: &str = "usdate";
pub const US_DATE_TIME_NAME: &str = "usdatetime";

pub const DEFAULT_TIME_ZONE: &str = "America/Los_Angeles";

pub const TRUE_LITERALS: &[&str] = &["1", "t", "true"];
pub const FALSE_LITERALS: &[&str] = &["0", "f", "false"];

pub const US_DATE_SENTINELS: &[&str] = &["0000-00-00", "00/00/0000"];
pub const US_DATE_TIME_SENTINELS: &[&str] = &["", "0000-00-00 00:00:00", "0000-00-00", "00/00/0000"];

pub const US_DATE_FORMAT: &str = "%m/%d/%Y"; // e.g., 12/15/2014
pub const ALT_US_DATE_FORMAT: &str = "%Y-%m-%d"; // e.g., 2014-12-15
pub const US_DATE_TIME_FORMAT: &str = "%m/%d/%Y %I:%M%P"; // e.g., 04/15/2014 08:00am
pub const ALT_US_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S"; // e.g., 2014-12-05 19:30:00
pub const US_DATE_MIXED_TIME_FORMAT: &str = "%m/%d/%Y %H:%M"; // e.g., 12/05/2014 19:30pm, marker stripped

/// Date layouts in the order they are tried, paired with the shape the text must have.
///
/// chrono accepts unpadded numbers, so the shape pins every field to its fixed width.
/// A `0` in a shape stands for any ASCII digit.
pub const US_DATE_LAYOUT: (&str, &str) = (US_DATE_FORMAT, "00/00/0000");
pub const ALT_US_DATE_LAYOUT: (&str, &str) = (ALT_US_DATE_FORMAT, "0000-00-00");
pub const US_DATE_LAYOUTS: &[(&str, &str)] = &[US_DATE_LAYOUT, ALT_US_DATE_LAYOUT];

pub const US_DATE_CLOCK_SHAPE: &str = "00/00/0000 00:00"; // before the am/pm marker
pub const ALT_US_DATE_TIME_SHAPE: &str = "0000-00-00 00:00:00";

/// Time-of-day part of a date-time, after the first space.
///
/// Either a 12-hour clock with an am/pm marker and an optional zone abbreviation,
/// or a 24-hour clock with optional seconds.
pub const TIME_OF_DAY_PATTERN: &str = r"^(?:(?:0[0-9]|1[0-2]):[0-5][0-9](?:am|pm)(?: [A-Z]{3})?|(?:[01][0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?)$";

/// Fixed-offset forms understood by the storage decoder.
pub const ISO_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z", // e.g., 2014-04-15T08:00:00.000-0700
    "%Y-%m-%d %H:%M:%S%.f%:z", // e.g., 2014-04-15 08:00:00.000-07:00
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Local forms understood by the storage decoder, read as UTC.
pub const ISO_LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f", // e.g., 2014-04-15T08:00:00.000
    "%Y-%m-%dT%H:%MZ",      // reduced precision
    "%Y-%m-%dT%H:%M",       // reduced precision, local
    "%Y-%m-%d %H:%M:%S%.f", // e.g., 2014-04-15 08:00:00
];

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
