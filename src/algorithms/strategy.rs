//! Fitting strategy selection.
//!
//! ## Purpose
//!
//! This module defines the closed set of fitting strategies the crate
//! supports and the fitted model each one produces.
//!
//! ## Design notes
//!
//! * **Closed**: Strategies are enum variants dispatched with `match`, so
//!   adding one is a compile-time change.
//! * **Parseable**: `FromStr` maps configuration strings to variants for
//!   callers that select a strategy by name.
//!
//! ## Non-goals
//!
//! * This module does not perform any fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use core::str::FromStr;
use num_traits::Float;

use crate::algorithms::linear::LinearFit;
use crate::algorithms::polynomial::polyval;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Fit Strategy
// ============================================================================

/// Curve-fitting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitStrategy {
    /// Closed-form straight line from sample sums.
    SimpleLinear,

    /// Least-squares polynomial via LU-factored normal equations (default).
    #[default]
    Polynomial,
}

impl FitStrategy {
    /// Short lowercase name, accepted back by `from_str`.
    pub const fn name(&self) -> &'static str {
        match self {
            FitStrategy::SimpleLinear => "linear",
            FitStrategy::Polynomial => "polynomial",
        }
    }
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FitStrategy {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("linear") || name.eq_ignore_ascii_case("simple_linear") {
            Ok(FitStrategy::SimpleLinear)
        } else if name.eq_ignore_ascii_case("polynomial") || name.eq_ignore_ascii_case("poly") {
            Ok(FitStrategy::Polynomial)
        } else {
            Err(RegressionError::UnknownStrategy(name.to_string()))
        }
    }
}

// ============================================================================
// Fitted Model
// ============================================================================

/// A fitted curve, tagged by the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FittedModel<T> {
    /// Output of the closed-form line fit.
    Linear(LinearFit<T>),

    /// Polynomial coefficients, constant term first.
    Polynomial(Vec<T>),
}

impl<T: Float> FittedModel<T> {
    /// Strategy that produced this model.
    pub fn strategy(&self) -> FitStrategy {
        match self {
            FittedModel::Linear(_) => FitStrategy::SimpleLinear,
            FittedModel::Polynomial(_) => FitStrategy::Polynomial,
        }
    }

    /// Evaluate the model at `x`.
    ///
    /// Unchecked: a non-finite `x` propagates into the result under IEEE
    /// rules. Use [`PolynomialRegression::evaluate`] for a checked
    /// evaluation that rejects it.
    ///
    /// [`PolynomialRegression::evaluate`]: crate::prelude::PolynomialRegression::evaluate
    pub fn evaluate(&self, x: T) -> T {
        match self {
            FittedModel::Linear(line) => line.evaluate(x),
            FittedModel::Polynomial(coeffs) => polyval(x, coeffs),
        }
    }

    /// Coefficients in increasing power order (`[intercept, slope]` for a line).
    pub fn coefficients(&self) -> Vec<T> {
        match self {
            FittedModel::Linear(line) => line.coefficients().to_vec(),
            FittedModel::Polynomial(coeffs) => coeffs.clone(),
        }
    }
}
