//! Execution engine for regression fits.
//!
//! ## Purpose
//!
//! This module provides the engine that every adapter delegates to. It
//! validates inputs, dispatches on the fitting strategy, runs the selected
//! algorithm and assembles the `FitResult`.
//!
//! ## Design notes
//!
//! * **Validate first**: Sample checks run before any matrix is built, so a
//!   too-small sample set is reported as `InsufficientSamples` rather than a
//!   singular decomposition.
//! * **Closed dispatch**: Strategies are matched exhaustively.
//! * **Logged**: Milestones go to the `log` facade at `debug`, rejected
//!   systems at `warn`.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * A returned polynomial has exactly `degree + 1` finite coefficients.
//!
//! ## Non-goals
//!
//! * This module does not hold state between fits (see `adapters::stateful`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use log::{debug, warn};
use num_traits::Float;

use crate::algorithms::linear::{LinearFit, simple_linear_fit};
use crate::algorithms::polynomial::solve_normal_equations;
use crate::algorithms::strategy::{FitStrategy, FittedModel};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::{RegressionError, Result};

// ============================================================================
// Configuration
// ============================================================================

/// Default polynomial degree.
pub const DEFAULT_DEGREE: usize = 4;

/// Resolved configuration for one fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitConfig {
    /// Fitting strategy.
    pub strategy: FitStrategy,

    /// Polynomial degree; ignored by `SimpleLinear`.
    pub degree: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            strategy: FitStrategy::default(),
            degree: DEFAULT_DEGREE,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver for the fitting pipeline.
pub struct RegressionExecutor;

impl RegressionExecutor {
    /// Run the configured strategy over `samples`.
    pub fn run<T: Float>(config: &FitConfig, samples: &[(T, T)]) -> Result<FitResult<T>> {
        debug!(
            "fit: strategy={}, degree={}, samples={}",
            config.strategy,
            config.degree,
            samples.len()
        );

        let (model, degree) = match config.strategy {
            FitStrategy::SimpleLinear => (FittedModel::Linear(Self::fit_linear(samples)?), 1),
            FitStrategy::Polynomial => (
                FittedModel::Polynomial(Self::fit_polynomial(samples, config.degree)?),
                config.degree,
            ),
        };

        Ok(FitResult {
            model,
            degree,
            n_samples: samples.len(),
        })
    }

    /// Validate `samples` and fit a degree-`degree` polynomial.
    ///
    /// # Errors
    ///
    /// * `EmptyInput` / `InvalidNumericValue` for bad samples.
    /// * `InsufficientSamples` for fewer than `degree + 1` distinct x values.
    /// * `SingularMatrix` when the normal equations cannot be solved.
    pub fn fit_polynomial<T: Float>(samples: &[(T, T)], degree: usize) -> Result<Vec<T>> {
        Validator::validate_samples(samples)?;
        Validator::validate_sample_count(samples, degree)?;

        solve_normal_equations(samples, degree).inspect_err(|err| {
            if let RegressionError::SingularMatrix { column } = err {
                warn!(
                    "degree {} fit over {} samples is singular at column {}",
                    degree,
                    samples.len(),
                    column
                );
            }
        })
    }

    /// Validate `samples` and fit a straight line in closed form.
    pub fn fit_linear<T: Float>(samples: &[(T, T)]) -> Result<LinearFit<T>> {
        Validator::validate_samples(samples)?;
        simple_linear_fit(samples)
    }
}
