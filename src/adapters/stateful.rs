//! Stateful adapter holding the most recent polynomial fit.
//!
//! ## Purpose
//!
//! This module provides `PolynomialRegression`, a reusable polynomial
//! model that remembers the degree and coefficients of its last successful
//! fit and evaluates them on demand.
//!
//! ## Design notes
//!
//! * **Overwrite on success**: A successful `fit` replaces the stored degree
//!   and coefficients.
//! * **Untouched on failure**: A failed `fit` leaves the previous state in
//!   place, so a model that was usable stays usable.
//! * **Exclusive mutation**: `fit` takes `&mut self`; sharing a model across
//!   threads requires external synchronization.
//!
//! ## Key concepts
//!
//! * **Default degree**: 4, unless configured otherwise.
//! * **NotFitted**: `evaluate` before the first successful fit is an error.
//!
//! ## Non-goals
//!
//! * This adapter does not keep the samples it was fitted on.
//! * This adapter does not support the closed-form line strategy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use core::marker::PhantomData;
use log::debug;
use num_traits::Float;

use crate::algorithms::polynomial::polyval;
use crate::engine::executor::{DEFAULT_DEGREE, RegressionExecutor};
use crate::engine::validator::Validator;
use crate::primitives::errors::{RegressionError, Result};

// ============================================================================
// Stateful Regression Builder
// ============================================================================

/// Builder for a stateful polynomial model.
#[derive(Debug, Clone)]
pub struct StatefulRegressionBuilder<T> {
    /// Degree used by `fit_default`
    pub degree: usize,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<RegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float + Debug> Default for StatefulRegressionBuilder<T> {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }
}

impl<T: Float + Debug> StatefulRegressionBuilder<T> {
    /// Set the default polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Build the stateful model.
    pub fn build(self) -> Result<PolynomialRegression<T>> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PolynomialRegression::with_degree(self.degree))
    }
}

// ============================================================================
// Polynomial Regression
// ============================================================================

/// Polynomial model that keeps its last fitted coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegression<T> {
    degree: usize,
    coefficients: Option<Vec<T>>,
}

impl<T: Float> Default for PolynomialRegression<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PolynomialRegression<T> {
    /// Create an unfitted model with the default degree (4).
    pub fn new() -> Self {
        Self::with_degree(DEFAULT_DEGREE)
    }

    /// Create an unfitted model with the given default degree.
    pub fn with_degree(degree: usize) -> Self {
        Self {
            degree,
            coefficients: None,
        }
    }

    /// Fit a degree-`degree` polynomial to `samples`.
    ///
    /// On success the degree and coefficients are stored and the
    /// coefficients (constant term first) are returned. On failure the model
    /// is left exactly as it was.
    pub fn fit(&mut self, samples: &[(T, T)], degree: usize) -> Result<&[T]> {
        let coefficients = RegressionExecutor::fit_polynomial(samples, degree)?;
        debug!("stateful model refitted at degree {}", degree);

        self.degree = degree;
        Ok(self.coefficients.insert(coefficients))
    }

    /// Fit with the currently configured degree.
    pub fn fit_default(&mut self, samples: &[(T, T)]) -> Result<&[T]> {
        self.fit(samples, self.degree)
    }

    /// Evaluate the fitted polynomial at `x`.
    ///
    /// This is the checked evaluation path. `FitResult::evaluate` and
    /// `FittedModel::evaluate` return the raw IEEE result instead.
    ///
    /// # Errors
    ///
    /// * `NotFitted` before the first successful fit.
    /// * `InvalidNumericValue` when `x` is not finite.
    pub fn evaluate(&self, x: T) -> Result<T> {
        let coeffs = self
            .coefficients
            .as_deref()
            .ok_or(RegressionError::NotFitted)?;
        Validator::validate_scalar(x, "x")?;
        Ok(polyval(x, coeffs))
    }

    /// Coefficients of the last successful fit, constant term first.
    pub fn coefficients(&self) -> Option<&[T]> {
        self.coefficients.as_deref()
    }

    /// Degree of the last successful fit, or the configured default.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Change the degree used by `fit_default`.
    ///
    /// Clears the stored coefficients, which no longer match the degree.
    pub fn set_degree(&mut self, degree: usize) {
        if degree != self.degree {
            self.coefficients = None;
        }
        self.degree = degree;
    }

    /// Whether a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}
