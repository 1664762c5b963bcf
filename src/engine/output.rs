//! Fit results and their text rendering.
//!
//! ## Purpose
//!
//! This module defines `FitResult`, the value returned by every adapter,
//! and its `Display` rendering: a short summary, the fitted formula, and a
//! coefficient table.
//!
//! ## Design notes
//!
//! * **Self-describing**: A result carries the strategy, degree and sample
//!   count that produced it.
//! * **Plain text**: Rendering targets terminals and logs only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::{self, Display, Formatter};
use num_traits::Float;

use crate::algorithms::strategy::{FitStrategy, FittedModel};

// ============================================================================
// Fit Result
// ============================================================================

/// Outcome of a successful fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult<T> {
    /// The fitted curve.
    pub model: FittedModel<T>,

    /// Polynomial degree of the model (1 for a line).
    pub degree: usize,

    /// Number of samples the model was fitted to.
    pub n_samples: usize,
}

impl<T: Float> FitResult<T> {
    /// Strategy that produced the model.
    pub fn strategy(&self) -> FitStrategy {
        self.model.strategy()
    }

    /// Coefficients in increasing power order, constant term first.
    pub fn coefficients(&self) -> Vec<T> {
        self.model.coefficients()
    }

    /// Evaluate the fitted curve at `x`.
    ///
    /// Unchecked, like [`FittedModel::evaluate`]: NaN or infinite input
    /// yields a non-finite output instead of an error.
    pub fn evaluate(&self, x: T) -> T {
        self.model.evaluate(x)
    }

    /// Evaluate the fitted curve at every `x`, unchecked.
    pub fn evaluate_all(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.model.evaluate(x)).collect()
    }
}

impl<T: Float> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let coeffs: Vec<f64> = self
            .coefficients()
            .iter()
            .map(|c| c.to_f64().unwrap_or(f64::NAN))
            .collect();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_samples)?;
        writeln!(f, "  Strategy: {}", self.strategy())?;
        writeln!(f, "  Degree: {}", self.degree)?;
        writeln!(f)?;

        writeln!(f, "Formula:")?;
        write!(f, "  y = ")?;
        write_formula(f, &coeffs)?;
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "  {:>6} {:>16}", "Power", "Coefficient")?;
        writeln!(f, "  {}", "-".repeat(23))?;
        for (k, c) in coeffs.iter().enumerate() {
            writeln!(f, "  {:>6} {:>16.6}", k, c)?;
        }

        Ok(())
    }
}

/// Write `c0 + c1*x + c2*x^2 ...`, folding negative coefficients into the sign.
fn write_formula(f: &mut Formatter<'_>, coeffs: &[f64]) -> fmt::Result {
    for (k, &c) in coeffs.iter().enumerate() {
        if k == 0 {
            write!(f, "{:.6}", c)?;
            continue;
        }

        let (sign, magnitude) = if c < 0.0 { ('-', -c) } else { ('+', c) };
        match k {
            1 => write!(f, " {} {:.6}*x", sign, magnitude)?,
            _ => write!(f, " {} {:.6}*x^{}", sign, magnitude, k)?,
        }
    }
    Ok(())
}
