pub(crate) mod config_validation;
mod time_of_day;
mod validation_utils;

pub use self::time_of_day::is_time_of_day;
