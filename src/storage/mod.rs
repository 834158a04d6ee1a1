mod driver_value;
pub mod traits;

pub use self::driver_value::DriverValue;
pub use self::traits::{Scanner, Valuer};
