//! Error types shared across the calculator
//!
//! Every input problem is terminal for the run: the first bad value aborts
//! the whole calculation before any file is created.

use thiserror::Error;

/// Errors that can abort a sizing run
#[derive(Debug, Error)]
pub enum SizerError {
    /// A field with no default was left blank (only rocket mass).
    #[error("rocket mass is required")]
    MissingMass,

    #[error("invalid input for {field}: {value:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid unit system {value:?}: enter \"metric\" or \"imperial\"")]
    InvalidUnitSystem { value: String },

    #[error("{field} must be strictly positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
