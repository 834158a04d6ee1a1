use config::ConfigError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Could not parse '{input}' as {format}: {reason}")]
    Parse {
        format: &'static str,
        input: String,
        reason: String,
    },
    #[error("Cannot scan {format} from a {source_type} driver value")]
    UnsupportedScanSource {
        format: &'static str,
        source_type: &'static str,
    },
    #[error("Text for {format} is not valid UTF-8")]
    InvalidUtf8 { format: &'static str },
    #[error("No format registered under the name '{0}'")]
    UnknownFormat(String),
    #[error(transparent)]
    JsonDecode(#[from] serde_json::Error),
}

impl FormatError {
    pub(crate) fn parse(format: &'static str, input: &str, reason: impl ToString) -> Self {
        FormatError::Parse {
            format,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
