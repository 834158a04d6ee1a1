use crate::config::{FormatKind, FormatsConfig};
use crate::error::ConstructionError;
use crate::formats::{bool_string, us_date, us_date_time};
use crate::registry::FormatRegistry;
use log::info;
use validator::Validate;

/// Builds a registry holding the configured formats.
pub fn bootstrap(config: &FormatsConfig) -> Result<FormatRegistry, ConstructionError> {
    config.validate()?;
    let zone = config.zone()?;

    let mut registry = FormatRegistry::new();
    for kind in &config.formats {
        match kind {
            FormatKind::BoolString => bool_string::register_into(&mut registry),
            FormatKind::UsDate => us_date::register_into(&mut registry),
            FormatKind::UsDateTime => us_date_time::register_into(&mut registry, zone),
        };
    }
    info!(
        "Bootstrapped {} formats, date-times in {zone}",
        registry.len()
    );
    Ok(registry)
}
