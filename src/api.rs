//! High-level API for curve fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder for configuring the fit and choosing an
//! execution adapter (Batch or Stateful), plus plain functions for callers
//! that only need a single operation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch (one result per call) and Stateful
//!   (a model that remembers its last fit).
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `Regression::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.degree()`).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchRegressionBuilder;
use crate::adapters::stateful::StatefulRegressionBuilder;
use crate::engine::executor::RegressionExecutor;
use crate::math::lu;
use crate::math::matrix as dense;

// Publicly re-exported types
pub use crate::adapters::batch::BatchRegression;
pub use crate::adapters::stateful::PolynomialRegression;
pub use crate::algorithms::linear::LinearFit;
pub use crate::algorithms::strategy::{FitStrategy, FittedModel};
pub use crate::engine::executor::{DEFAULT_DEGREE, FitConfig};
pub use crate::engine::output::FitResult;
pub use crate::math::lu::LuDecomposition;
pub use crate::primitives::errors::{RegressionError, Result};
pub use crate::primitives::matrix::Matrix;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Stateful};
}

// ============================================================================
// Regression Builder
// ============================================================================

/// Fluent builder for configuring a fit and its execution mode.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T: Float + Debug> {
    /// Fitting strategy (default: Polynomial).
    pub strategy: Option<FitStrategy>,

    /// Polynomial degree (default: 4).
    pub degree: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float + Debug> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> RegressionBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RegressionAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            strategy: None,
            degree: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the fitting strategy.
    pub fn strategy(mut self, strategy: FitStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Shortcut for `.adapter(Adapter::Batch).build()`.
    pub fn build(self) -> Result<BatchRegression<T>> {
        self.adapter(Batch).build()
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RegressionAdapter<T: Float + Debug> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RegressionBuilder`] into a specialized execution builder.
    fn convert(builder: RegressionBuilder<T>) -> Self::Output;
}

/// Marker for one-shot batch fitting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float + Debug> RegressionAdapter<T> for Batch {
    type Output = BatchRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = BatchRegressionBuilder::default();

        if let Some(strategy) = builder.strategy {
            result = result.strategy(strategy);
        }
        if let Some(degree) = builder.degree {
            result = result.degree(degree);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for a reusable polynomial model.
#[derive(Debug, Clone, Copy)]
pub struct Stateful;

impl<T: Float + Debug> RegressionAdapter<T> for Stateful {
    type Output = StatefulRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = StatefulRegressionBuilder::default();

        if let Some(strategy @ FitStrategy::SimpleLinear) = builder.strategy {
            result.deferred_error = Some(RegressionError::UnsupportedStrategy {
                strategy,
                adapter: "Stateful",
            });
        }
        if let Some(degree) = builder.degree {
            result = result.degree(degree);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Functional Entry Points
// ============================================================================

/// Multiply two dense matrices.
///
/// Fails with `InvalidDimensions` when `left.cols() != right.rows()`.
pub fn matrix_multiply<T: Float>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>> {
    dense::multiply(left, right)
}

/// Transpose a dense matrix.
pub fn matrix_transpose<T: Float>(matrix: &Matrix<T>) -> Matrix<T> {
    dense::transpose(matrix)
}

/// Decompose a square matrix into `L·U == P·A`.
///
/// The pivot row for each column is the one whose pivot entry is largest
/// relative to the rest of its row.
pub fn lu_decompose<T: Float>(matrix: &Matrix<T>) -> Result<LuDecomposition<T>> {
    lu::decompose(matrix)
}

/// Fit a straight line through `samples` in closed form.
///
/// # Example
///
/// ```
/// use polyreg_rs::prelude::*;
///
/// let line = simple_linear_fit(&[(1.0_f64, 1.0), (2.0, 2.0), (3.0, 3.0)])?;
/// assert!((line.slope - 1.0_f64).abs() < 1e-12);
/// assert!(line.intercept.abs() < 1e-12);
/// # Result::<(), RegressionError>::Ok(())
/// ```
pub fn simple_linear_fit<T: Float>(samples: &[(T, T)]) -> Result<LinearFit<T>> {
    RegressionExecutor::fit_linear(samples)
}

/// Fit a degree-`degree` polynomial to `samples` by least squares.
///
/// Returns `degree + 1` coefficients, constant term first.
pub fn fit_polynomial<T: Float>(samples: &[(T, T)], degree: usize) -> Result<Vec<T>> {
    RegressionExecutor::fit_polynomial(samples, degree)
}
