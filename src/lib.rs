pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod registry;
pub mod storage;
pub(crate) mod utils;
mod validation;

pub use error::{ConstructionError, FormatError};
pub use formats::{AnyFormat, BoolString, ScalarFormat, UsDate, UsDateTime};
pub use registry::{FormatRegistry, bootstrap};
pub use storage::{DriverValue, Scanner, Valuer};
pub use validation::is_time_of_day;
