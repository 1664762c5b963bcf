//! Polynomial least squares via LU-factored normal equations.
//!
//! ## Purpose
//!
//! This module computes the coefficients of the degree-`d` polynomial that
//! minimizes the squared error over a sample set, and evaluates coefficient
//! vectors.
//!
//! ## Design notes
//!
//! * **Pipeline**: samples → design matrix `Z` → `(ZᵗZ, Zᵗy)` →
//!   LU decomposition → substitution → coefficients.
//! * **Unchecked**: Input validation is the engine's job; this module only
//!   guarantees that a singular system surfaces as `SingularMatrix`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Returned coefficient vectors have `degree + 1` finite entries,
//!   constant term first.
//!
//! ## Non-goals
//!
//! * This module does not validate sample counts or finiteness.
//! * This module does not regularize ill-conditioned systems.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use log::trace;
use num_traits::Float;

use crate::algorithms::design::{design_matrix, normal_equations};
use crate::math::lu::decompose;
use crate::math::summation::values_by;
use crate::primitives::errors::{RegressionError, Result};

// ============================================================================
// Fitting
// ============================================================================

/// Solve the normal equations for a degree-`degree` polynomial through `samples`.
///
/// # Errors
///
/// `SingularMatrix` when `ZᵗZ` cannot be factored or the solution is not finite.
pub fn solve_normal_equations<T: Float>(samples: &[(T, T)], degree: usize) -> Result<Vec<T>> {
    let xs = values_by(samples, |&(x, _)| x);
    let ys = values_by(samples, |&(_, y)| y);

    let z = design_matrix(&xs, degree);
    let (lhs, rhs) = normal_equations(&z, &ys)?;
    trace!(
        "normal equations: {}x{} system from {} samples",
        lhs.rows(),
        lhs.cols(),
        samples.len()
    );

    let lu = decompose(&lhs)?;
    let coefficients = lu.solve(&rhs)?.into_vec();

    // A factorization can succeed on a numerically singular system and still
    // overflow during substitution.
    if let Some(k) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(RegressionError::SingularMatrix { column: k });
    }

    Ok(coefficients)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate `Σ coeffs[k] * x^k`.
///
/// The constant term is added as-is; higher powers are accumulated by
/// repeated multiplication.
#[inline]
pub fn polyval<T: Float>(x: T, coeffs: &[T]) -> T {
    let Some((&constant, rest)) = coeffs.split_first() else {
        return T::zero();
    };

    let mut sum = constant;
    let mut x_pow = T::one();
    for &c in rest {
        x_pow = x_pow * x;
        sum = sum + c * x_pow;
    }
    sum
}
