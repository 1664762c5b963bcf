//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any fit:
//! sample finiteness, sample sufficiency for the requested degree, and
//! builder consistency.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Sufficiency**: A degree-`d` fit needs `d + 1` distinct x values;
//!   anything less makes the normal-equation matrix singular.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering::Equal;
use num_traits::Float;

use crate::algorithms::strategy::FitStrategy;
use crate::primitives::errors::{RegressionError, Result};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// Provides static methods that return `Result<()>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sample set: non-empty and finite.
    pub fn validate_samples<T: Float>(samples: &[(T, T)]) -> Result<()> {
        // Check 1: Non-empty
        if samples.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &(x, y)) in samples.iter().enumerate() {
            if !x.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y.is_finite() {
                return Err(RegressionError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that `samples` has at least `degree + 1` distinct x values.
    pub fn validate_sample_count<T: Float>(samples: &[(T, T)], degree: usize) -> Result<()> {
        let min = degree.saturating_add(1);
        let got = distinct_x_count(samples);
        if got < min {
            return Err(RegressionError::InsufficientSamples { got, min });
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<()> {
        if !val.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate an explicitly requested degree against the strategy.
    ///
    /// The closed-form line is degree 1 by construction.
    pub fn validate_degree(strategy: FitStrategy, degree: Option<usize>) -> Result<()> {
        match (strategy, degree) {
            (FitStrategy::SimpleLinear, Some(d)) if d != 1 => Err(RegressionError::InvalidDegree {
                degree: d,
                strategy,
            }),
            _ => Ok(()),
        }
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<()> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

/// Number of distinct x values in `samples`.
fn distinct_x_count<T: Float>(samples: &[(T, T)]) -> usize {
    let mut xs: Vec<T> = samples.iter().map(|&(x, _)| x).collect();
    xs.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    xs.dedup();
    xs.len()
}
