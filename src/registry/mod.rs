mod bootstrap;
mod format_registry;

pub use self::bootstrap::bootstrap;
pub use self::format_registry::{FormatRegistry, Parser, Validator, normalize_name};
