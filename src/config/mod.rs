mod config_loader;
mod formats_config;

pub use self::config_loader::ConfigLoader;
pub use self::formats_config::{FormatKind, FormatsConfig};
