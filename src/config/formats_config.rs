use crate::constants::DEFAULT_TIME_ZONE;
use crate::error::ConstructionError;
use crate::validation::config_validation::{validate_time_zone, validate_unique_formats};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use validator::Validate;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormatKind {
    BoolString,
    UsDate,
    UsDateTime,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_formats() -> Vec<FormatKind> {
    vec![
        FormatKind::BoolString,
        FormatKind::UsDate,
        FormatKind::UsDateTime,
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct FormatsConfig {
    /// IANA zone that US date-times are read in by the bootstrapped registry.
    ///
    /// `UsDateTime::parse`, `unmarshal_text` and serde decoding always read US Pacific time.
    /// Use `UsDateTime::parse_in` to read other zones directly.
    #[serde(default = "default_time_zone")]
    #[validate(custom(function = "validate_time_zone"))]
    pub time_zone: String,
    #[serde(default = "default_formats")]
    #[validate(custom(function = "validate_unique_formats"))]
    pub formats: Vec<FormatKind>,
}

impl FormatsConfig {
    pub fn new(time_zone: &str, formats: Vec<FormatKind>) -> Self {
        FormatsConfig {
            time_zone: time_zone.to_string(),
            formats,
        }
    }

    pub fn zone(&self) -> Result<Tz, ConstructionError> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| ConstructionError::UnknownTimeZone(self.time_zone.clone()))
    }
}

impl Default for FormatsConfig {
    fn default() -> Self {
        FormatsConfig {
            time_zone: default_time_zone(),
            formats: default_formats(),
        }
    }
}
