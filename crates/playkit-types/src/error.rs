use std::fmt;

/// Result type for playkit-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures for user-supplied dimensions and dice settings
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The three side lengths violate the triangle inequality
    InvalidTriangle { a: f64, b: f64, c: f64 },

    /// A value lies outside the range its input control allows
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTriangle { a, b, c } => write!(
                f,
                "side lengths a={:.2}, b={:.2}, c={:.2} cannot form a triangle",
                a, b, c
            ),
            Error::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be between {} and {} (got {})",
                field, min, max, value
            ),
        }
    }
}

impl std::error::Error for Error {}
