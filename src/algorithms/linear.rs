//! Closed-form simple linear regression.
//!
//! ## Purpose
//!
//! This module fits `y = slope * x + intercept` by ordinary least squares
//! directly from four sample sums, without any matrix machinery.
//!
//! ## Key concepts
//!
//! ```text
//! slope     = (n Σxy − Σy Σx) / (n Σx² − (Σx)²)
//! intercept = (Σy Σx² − Σx Σxy) / (n Σx² − (Σx)²)
//! ```
//!
//! ## Invariants
//!
//! * The shared denominator is non-zero for any returned fit.
//! * A returned slope and intercept are finite.
//!
//! ## Non-goals
//!
//! * This module does not compute residuals or goodness-of-fit statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

use num_traits::Float;

use crate::math::summation::sum_by;
use crate::primitives::errors::{RegressionError, Result};

/// Straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit<T> {
    /// Gradient of the line.
    pub slope: T,

    /// Value at `x = 0`.
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Evaluate the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// `[intercept, slope]`, matching polynomial coefficient order.
    #[inline]
    pub fn coefficients(&self) -> [T; 2] {
        [self.intercept, self.slope]
    }
}

/// Fit a straight line to `samples` in closed form.
///
/// # Errors
///
/// * `EmptyInput` when `samples` is empty.
/// * `DegenerateInput` when every x is identical (zero denominator).
/// * `InvalidNumericValue` when the sums overflow or a sample is not finite.
pub fn simple_linear_fit<T: Float>(samples: &[(T, T)]) -> Result<LinearFit<T>> {
    if samples.is_empty() {
        return Err(RegressionError::EmptyInput);
    }

    let first_x = samples[0].0;
    if samples.iter().all(|&(x, _)| x == first_x) {
        return Err(RegressionError::DegenerateInput);
    }

    let n = T::from(samples.len()).ok_or_else(|| {
        RegressionError::InvalidNumericValue(format!("n={}", samples.len()))
    })?;
    let sum_x = sum_by(samples, |&(x, _)| x);
    let sum_x2 = sum_by(samples, |&(x, _)| x * x);
    let sum_y = sum_by(samples, |&(_, y)| y);
    let sum_xy = sum_by(samples, |&(x, y)| x * y);

    let denominator = n * sum_x2 - sum_x * sum_x;
    if !denominator.is_finite() {
        return Err(non_finite("denominator", denominator));
    }
    if denominator == T::zero() {
        return Err(RegressionError::DegenerateInput);
    }

    let slope = (n * sum_xy - sum_y * sum_x) / denominator;
    let intercept = (sum_y * sum_x2 - sum_x * sum_xy) / denominator;
    if !slope.is_finite() {
        return Err(non_finite("slope", slope));
    }
    if !intercept.is_finite() {
        return Err(non_finite("intercept", intercept));
    }

    Ok(LinearFit { slope, intercept })
}

fn non_finite<T: Float>(name: &str, value: T) -> RegressionError {
    RegressionError::InvalidNumericValue(format!(
        "{}={}",
        name,
        value.to_f64().unwrap_or(f64::NAN)
    ))
}
