use crate::config::FormatKind;
use crate::validation::validation_utils::fail_validation_on_duplicates;
use chrono_tz::Tz;
use std::borrow::Cow;
use std::collections::HashSet;
use validator::ValidationError;

pub fn validate_time_zone(time_zone: &str) -> Result<(), ValidationError> {
    match time_zone.parse::<Tz>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = ValidationError::new("unknown_time_zone");
            error.add_param(Cow::from("time_zone"), &time_zone);
            Err(error.with_message(Cow::Owned(format!(
                "'{time_zone}' is not an IANA time zone name."
            ))))
        }
    }
}

pub fn validate_unique_formats(formats: &[FormatKind]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&FormatKind> = HashSet::new();
    let duplicates: Vec<String> = formats
        .iter()
        .filter(|kind| !seen.insert(*kind))
        .map(|kind| kind.to_string())
        .collect();
    fail_validation_on_duplicates(&duplicates, "duplicates", "Found duplicate formats")
}
