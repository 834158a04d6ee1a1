use crate::constants::TIME_OF_DAY_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static TIME_OF_DAY: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(TIME_OF_DAY_PATTERN));

/// Checks the time-of-day half of a date-time such as `08:00am`, `08:00am PST` or `19:30:00`.
///
/// Hours run `00`-`12` with an am/pm marker and `00`-`23` without one. Minutes and seconds
/// run `00`-`59`.
pub fn is_time_of_day(text: &str) -> bool {
    TIME_OF_DAY.as_ref().is_ok_and(|rx| rx.is_match(text))
}
