use crate::constants::{BOOL_STRING_NAME, FALSE_LITERALS, TRUE_LITERALS};
use crate::error::FormatError;
use crate::formats::traits::ScalarFormat;
use crate::registry::FormatRegistry;
use crate::storage::{DriverValue, Scanner, Valuer};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A boolean carried as a string, which may also be absent.
///
/// `""` means absent. Present values accept `1 t true 0 f false` in any case and
/// are always written back as `true` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolString {
    value: bool,
    valid: bool,
}

impl BoolString {
    pub fn new(value: bool) -> Self {
        BoolString { value, valid: true }
    }

    pub fn absent() -> Self {
        BoolString::default()
    }

    pub fn get(&self) -> Option<bool> {
        self.valid.then_some(self.value)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<bool> for BoolString {
    fn from(value: bool) -> Self {
        BoolString::new(value)
    }
}

impl From<Option<bool>> for BoolString {
    fn from(value: Option<bool>) -> Self {
        value.map(BoolString::new).unwrap_or_default()
    }
}

pub fn is_bool_string(text: &str) -> bool {
    text.is_empty() || parse_bool_literal(text).is_some()
}

fn parse_bool_literal(text: &str) -> Option<bool> {
    let lowered = text.to_lowercase();
    if TRUE_LITERALS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_LITERALS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

pub fn register_into(registry: &mut FormatRegistry) -> bool {
    registry.add::<BoolString>(BOOL_STRING_NAME, is_bool_string)
}

impl ScalarFormat for BoolString {
    const NAME: &'static str = BOOL_STRING_NAME;

    fn validate(text: &str) -> bool {
        is_bool_string(text)
    }

    fn parse(text: &str) -> Result<Self, FormatError> {
        if text.is_empty() {
            return Ok(BoolString::absent());
        }
        parse_bool_literal(text)
            .map(BoolString::new)
            .ok_or_else(|| FormatError::parse(Self::NAME, text, "not a boolean literal"))
    }
}

impl FromStr for BoolString {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolString::parse(s)
    }
}

impl fmt::Display for BoolString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

impl Scanner for BoolString {
    fn scan(&mut self, raw: DriverValue) -> Result<(), FormatError> {
        let parsed = match raw {
            DriverValue::Null => BoolString::absent(),
            DriverValue::Bytes(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| FormatError::InvalidUtf8 { format: Self::NAME })?;
                BoolString::parse(&text)?
            }
            DriverValue::Text(text) => BoolString::parse(&text)?,
            other => {
                return Err(FormatError::UnsupportedScanSource {
                    format: Self::NAME,
                    source_type: other.type_name(),
                });
            }
        };
        *self = parsed;
        Ok(())
    }
}

impl Valuer for BoolString {
    fn value(&self) -> Result<DriverValue, FormatError> {
        Ok(self.get().into())
    }
}

impl Serialize for BoolString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(value) => serializer.serialize_bool(value),
            None => serializer.serialize_none(),
        }
    }
}

struct BoolStringVisitor;

impl<'de> Visitor<'de> for BoolStringVisitor {
    type Value = BoolString;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean string, a boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        BoolString::parse(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(BoolString::new(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(BoolString::absent())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(BoolString::absent())
    }
}

impl<'de> Deserialize<'de> for BoolString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoolStringVisitor)
    }
}
