pub mod bool_string;
pub mod iso;
pub mod traits;
pub mod us_date;
pub mod us_date_time;

pub use self::bool_string::BoolString;
pub use self::traits::{AnyFormat, ScalarFormat};
pub use self::us_date::UsDate;
pub use self::us_date_time::UsDateTime;
