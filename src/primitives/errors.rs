//! Error types for regression fitting.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate, from matrix products up to the builder API.
//!
//! ## Design notes
//!
//! * **Typed**: Each failure mode is its own variant carrying the values
//!   needed to diagnose it.
//! * **no_std**: Derived with `thiserror` without its `std` feature, so the
//!   type implements `core::error::Error` in both configurations.
//! * **Final**: No variant is retried; fitting is deterministic.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors or produce partial results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use thiserror::Error;

use crate::algorithms::strategy::FitStrategy;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RegressionError>;

/// Errors that can occur while building matrices or fitting curves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegressionError {
    /// Sample set (or matrix to decompose) is empty.
    #[error("Input is empty")]
    EmptyInput,

    /// Matrix shapes are incompatible for the requested operation.
    #[error(
        "Invalid dimensions: cannot combine {left_rows}x{left_cols} with {right_rows}x{right_cols}"
    )]
    InvalidDimensions {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// LU decomposition requires a square matrix.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// No usable pivot exists for the given column.
    #[error("Matrix is singular: no usable pivot in column {column}")]
    SingularMatrix {
        /// Pivot column at which elimination failed.
        column: usize,
    },

    /// Closed-form linear fit has a zero denominator (no x variance).
    #[error("Degenerate input: all x values are identical")]
    DegenerateInput,

    /// Evaluation was requested before a successful fit.
    #[error("Model has not been fitted")]
    NotFitted,

    /// Not enough distinct x values for the requested degree.
    #[error("Insufficient samples: got {got} distinct x values, need at least {min}")]
    InsufficientSamples {
        /// Distinct x values supplied.
        got: usize,
        /// Minimum required (`degree + 1`).
        min: usize,
    },

    /// A sample or query value is NaN or infinite.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// The degree conflicts with the selected strategy.
    #[error("Invalid degree {degree} for {strategy} strategy")]
    InvalidDegree {
        /// Requested degree.
        degree: usize,
        /// Strategy it was requested for.
        strategy: FitStrategy,
    },

    /// A builder parameter was set more than once.
    #[error("Parameter `{parameter}` was set more than once")]
    DuplicateParameter {
        /// Name of the repeated setter.
        parameter: &'static str,
    },

    /// The selected adapter cannot run the selected strategy.
    #[error("The {adapter} adapter does not support the {strategy} strategy")]
    UnsupportedStrategy {
        /// Strategy that was requested.
        strategy: FitStrategy,
        /// Adapter that rejected it.
        adapter: &'static str,
    },

    /// Strategy name not recognised.
    #[error("Unknown fitting strategy: {0}")]
    UnknownStrategy(String),
}
