use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    /// The requested category column is not part of the table
    #[error("Column '{0}' not found.")]
    InvalidColumn(String),

    /// Sampling fraction outside of (0, 1]
    #[error("Fraction must be between 0 and 1 (got {0}).")]
    InvalidFraction(String),

    #[error("Uploaded file contains no data.")]
    EmptyInput,

    /// Unexpected failure while partitioning or drawing rows
    #[error("An error occurred: {0}")]
    SamplingFailure(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[source] csv::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error stems from what the user supplied (file, column,
    /// percentage) rather than from the environment.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::InvalidColumn(_)
                | Error::InvalidFraction(_)
                | Error::EmptyInput
                | Error::InvalidInput(_)
                | Error::Csv(_)
        )
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
