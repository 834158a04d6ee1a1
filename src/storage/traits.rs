use crate::error::FormatError;
use crate::storage::DriverValue;

/// Reads a value out of a database column.
///
/// On error the receiver keeps the state it had before the call.
pub trait Scanner {
    fn scan(&mut self, raw: DriverValue) -> Result<(), FormatError>;
}

/// Writes a value into a database column.
pub trait Valuer {
    fn value(&self) -> Result<DriverValue, FormatError>;
}
