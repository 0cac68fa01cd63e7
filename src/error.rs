//! # Error Types
//!
//! This module defines the error type shared by every stage of an optimization
//! run. Errors are never retried internally: any failure aborts the current run
//! and is handed back to the caller unchanged.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bwo::error::{OptimizerError, Result};
//!
//! fn check_size(n: usize) -> Result<usize> {
//!     if n == 0 {
//!         return Err(OptimizerError::InvalidConfiguration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(n)
//! }
//!
//! assert!(check_size(0).is_err());
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error produced by a user-supplied objective function.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// Represents errors that can occur while running the optimizer.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// A run parameter is out of range, or the parameters combine into a
    /// degenerate run (for example zero reproducing individuals).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Data handed to an operation is inconsistent, such as a fitness vector
    /// whose length differs from the population or an empty population.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The objective function failed. The original error is kept as the source.
    #[error("Objective function error: {0}")]
    Objective(#[source] BoxedError),

    /// The objective returned a value that cannot be ranked.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

impl OptimizerError {
    /// Wraps any error raised by an objective function.
    pub fn objective<E>(error: E) -> Self
    where
        E: Into<BoxedError>,
    {
        OptimizerError::Objective(error.into())
    }
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;
