use crate::error::FormatError;
use crate::formats::traits::{AnyFormat, ScalarFormat};
use crate::formats::{bool_string, us_date, us_date_time};
use log::{info, warn};
use std::fmt;
use std::sync::Arc;

pub type Validator = fn(&str) -> bool;
pub type Parser = Arc<dyn Fn(&str) -> Result<Box<dyn AnyFormat>, FormatError> + Send + Sync>;

/// Lowercases and drops `-`, `_` and spaces, so `US-Date` and `us_date` name the same format.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Clone)]
struct FormatEntry {
    name: String,
    type_name: &'static str,
    validator: Validator,
    parser: Parser,
}

impl fmt::Debug for FormatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatEntry")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Named string formats, each with a validator and a parser.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    entries: Vec<FormatEntry>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three formats, date-times read in US Pacific time.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        bool_string::register_into(&mut registry);
        us_date::register_into(&mut registry);
        us_date_time::register_into(&mut registry, us_date_time::DEFAULT_ZONE);
        registry
    }

    /// Registers `F` under `name`. Returns `false` when an existing entry was replaced.
    pub fn add<F: ScalarFormat>(&mut self, name: &str, validator: Validator) -> bool {
        self.add_with_parser(
            name,
            F::NAME,
            validator,
            Arc::new(|text: &str| -> Result<Box<dyn AnyFormat>, FormatError> {
                Ok(Box::new(F::parse(text)?))
            }),
        )
    }

    pub fn add_with_parser(
        &mut self,
        name: &str,
        type_name: &'static str,
        validator: Validator,
        parser: Parser,
    ) -> bool {
        let entry = FormatEntry {
            name: normalize_name(name),
            type_name,
            validator,
            parser,
        };
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                warn!("Format '{}' was already registered. Replacing it.", entry.name);
                *existing = entry;
                false
            }
            None => {
                info!("Registered format '{}' ({type_name})", entry.name);
                self.entries.push(entry);
                true
            }
        }
    }

    fn entry(&self, name: &str) -> Option<&FormatEntry> {
        let name = normalize_name(name);
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn get_type(&self, name: &str) -> Option<&'static str> {
        self.entry(name).map(|e| e.type_name)
    }

    /// Unknown names never validate.
    pub fn validates(&self, name: &str, text: &str) -> bool {
        self.entry(name).is_some_and(|e| (e.validator)(text))
    }

    pub fn parse(&self, name: &str, text: &str) -> Result<Box<dyn AnyFormat>, FormatError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))?;
        (entry.parser)(text)
    }

    pub fn del_by_name(&mut self, name: &str) -> bool {
        let name = normalize_name(name);
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before != self.entries.len()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
