use chrono::{DateTime, FixedOffset};

/// A single column value as exchanged with a database driver.
///
/// Formats only ever produce `Null`, `Bool`, `Text` and `Timestamp`. The numeric
/// variants exist because drivers hand them over and scans must reject them.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    /// Raw bytes, usually UTF-8 text from a text column.
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(DateTime<FixedOffset>),
}

impl DriverValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int64(_) => "int64",
            DriverValue::Float64(_) => "float64",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Text(_) => "text",
            DriverValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        DriverValue::Text(value.to_string())
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        DriverValue::Text(value)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(value: &[u8]) -> Self {
        DriverValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        DriverValue::Bytes(value)
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        DriverValue::Bool(value)
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        DriverValue::Int64(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        DriverValue::Float64(value)
    }
}

impl From<DateTime<FixedOffset>> for DriverValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DriverValue::Timestamp(value)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DriverValue::Null)
    }
}
