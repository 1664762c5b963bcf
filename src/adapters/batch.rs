//! Batch adapter for one-shot regression fits.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: a validated, immutable
//! configuration that fits any number of independent sample sets and
//! returns a `FitResult` for each.
//!
//! ## Design notes
//!
//! * **Stateless**: `fit` borrows the configuration and keeps nothing.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * A built `BatchRegression` always holds a consistent strategy/degree pair.
//!
//! ## Non-goals
//!
//! * This adapter does not remember previous fits (use the stateful adapter).

use core::fmt::Debug;
use core::marker::PhantomData;
use num_traits::Float;

use crate::algorithms::strategy::FitStrategy;
use crate::engine::executor::{DEFAULT_DEGREE, FitConfig, RegressionExecutor};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::{RegressionError, Result};

// ============================================================================
// Batch Regression Builder
// ============================================================================

/// Builder for the batch regression processor.
#[derive(Debug, Clone)]
pub struct BatchRegressionBuilder<T> {
    /// Fitting strategy
    pub strategy: FitStrategy,

    /// Explicitly requested polynomial degree, if any
    pub degree: Option<usize>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<RegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float + Debug> Default for BatchRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> BatchRegressionBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            strategy: FitStrategy::default(),
            degree: None,
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the fitting strategy.
    pub fn strategy(mut self, strategy: FitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = Some(degree);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRegression<T>> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Check the degree against the strategy
        Validator::validate_degree(self.strategy, self.degree)?;

        let degree = match self.strategy {
            FitStrategy::SimpleLinear => 1,
            FitStrategy::Polynomial => self.degree.unwrap_or(DEFAULT_DEGREE),
        };

        Ok(BatchRegression {
            config: FitConfig {
                strategy: self.strategy,
                degree,
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Batch Regression Processor
// ============================================================================

/// Batch regression processor.
#[derive(Debug, Clone, Copy)]
pub struct BatchRegression<T> {
    config: FitConfig,
    _marker: PhantomData<T>,
}

impl<T: Float> BatchRegression<T> {
    /// Fit the configured curve to `samples`.
    pub fn fit(&self, samples: &[(T, T)]) -> Result<FitResult<T>> {
        RegressionExecutor::run(&self.config, samples)
    }

    /// Resolved configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }
}
