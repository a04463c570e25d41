pub mod number;
pub mod style;
pub mod time;

pub use number::{format_fixed, format_mean};
pub use style::Painter;
pub use time::format_timestamp;
