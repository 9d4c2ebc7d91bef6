//! Error types for the stock visualization helpers.
//!
//! Plotting operations never catch or retry: every failure is returned to the
//! caller through [`Error`], together with the crate-wide [`Result`] alias.

/// Errors produced while validating inputs, computing curves or loading data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input handed to a plotting operation is not a labeled time series.
    #[error("Expected {expected}, found {found}")]
    TypeMismatch {
        /// What the operation requires
        expected: &'static str,
        /// What it was given
        found: &'static str,
    },

    /// The operation needs at least one sample.
    #[error("Series has no samples")]
    EmptySeries,

    /// Timestamps must be unique and strictly increasing.
    #[error("Timestamp at position {position} is not after its predecessor")]
    UnorderedIndex {
        /// Position of the first offending timestamp
        position: usize,
    },

    /// Two sequences that must pair up element-wise have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left-hand sequence
        left: usize,
        /// Length of the right-hand sequence
        right: usize,
    },

    /// A price table does not contain the requested column.
    #[error("Missing column `{0}`")]
    MissingColumn(String),

    /// A date field could not be parsed.
    #[error("Invalid date `{0}`")]
    InvalidDate(String),

    /// The chart API answered with a payload we cannot interpret.
    #[error("Invalid chart response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[cfg(feature = "parquet")]
    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[cfg(feature = "parquet")]
    #[error(transparent)]
    Arrow(#[from] arrow_schema::ArrowError),
}

/// Result type for the stock visualization helpers
pub type Result<T> = std::result::Result<T, Error>;
