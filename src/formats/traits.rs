use crate::error::FormatError;
use crate::storage::{DriverValue, Scanner, Valuer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::fmt::{Debug, Display};

/// A named string format that can be validated, parsed, rendered, stored and sent as JSON.
///
/// `Display` is the text form and `FromStr`-style construction goes through [`ScalarFormat::parse`].
/// The database binding comes from the [`Scanner`] and [`Valuer`] supertraits.
pub trait ScalarFormat:
    Scanner
    + Valuer
    + Display
    + Debug
    + Default
    + Clone
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Registry name of the format.
    const NAME: &'static str;

    fn validate(text: &str) -> bool;

    fn parse(text: &str) -> Result<Self, FormatError>;

    /// Parses into an existing slot. The slot is untouched on error.
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), FormatError> {
        let text =
            std::str::from_utf8(text).map_err(|_| FormatError::InvalidUtf8 { format: Self::NAME })?;
        *self = Self::parse(text)?;
        Ok(())
    }

    fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    fn to_json(&self) -> Result<Vec<u8>, FormatError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn from_json(data: &[u8]) -> Result<Self, FormatError> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// Object safe view of a parsed format value, as handed out by the registry.
pub trait AnyFormat: Debug + Send + Sync {
    fn format_name(&self) -> &'static str;

    fn to_text(&self) -> String;

    fn to_storage(&self) -> Result<DriverValue, FormatError>;

    fn to_json_value(&self) -> Result<serde_json::Value, FormatError>;

    fn as_any(&self) -> &dyn Any;
}

impl<F: ScalarFormat> AnyFormat for F {
    fn format_name(&self) -> &'static str {
        F::NAME
    }

    fn to_text(&self) -> String {
        self.to_string()
    }

    fn to_storage(&self) -> Result<DriverValue, FormatError> {
        self.value()
    }

    fn to_json_value(&self) -> Result<serde_json::Value, FormatError> {
        Ok(serde_json::to_value(self)?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AnyFormat {
    pub fn downcast_ref<F: ScalarFormat>(&self) -> Option<&F> {
        self.as_any().downcast_ref::<F>()
    }
}
