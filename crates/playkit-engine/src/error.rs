use std::fmt;

/// Result type for playkit-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Input rejected by domain validation
    Domain(playkit_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV encoding failed
    Csv(csv::Error),
}

impl Error {
    /// True when the inputs describe a triangle that cannot exist
    pub fn is_invalid_triangle(&self) -> bool {
        matches!(
            self,
            Error::Domain(playkit_types::Error::InvalidTriangle { .. })
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain(err) => write!(f, "Invalid input: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Domain(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
        }
    }
}

impl From<playkit_types::Error> for Error {
    fn from(err: playkit_types::Error) -> Self {
        Error::Domain(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
