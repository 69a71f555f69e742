use thiserror::Error;

/// Validation failures raised while building engine configuration or
/// ingesting row data. The engines themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Pagination needs at least one row per page.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// Lower numeric bound sits above the upper bound.
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// Step must be a positive finite number.
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    /// Row payload was not a JSON array.
    #[error("expected an array of rows, got {0}")]
    RowsNotArray(&'static str),
    /// A row entry was not a JSON object.
    #[error("row {index} is not an object")]
    RowNotObject {
        /// Position of the offending entry.
        index: usize,
    },
}
