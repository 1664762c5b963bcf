//! Forward and backward substitution over LU factors.
//!
//! ## Purpose
//!
//! Given `L`, `U` and the pivot array from [`crate::math::lu::decompose`],
//! this module solves `A * X = R` for every column of `R`.
//!
//! ## Key concepts
//!
//! * **Forward pass**: `L * D = P * R`, reading `R` through the pivot array.
//! * **Backward pass**: `U * X = D`; `U` has a unit diagonal so no division
//!   is needed.
//! * Columns of `R` are solved independently.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::math::lu::LuDecomposition;
use crate::primitives::errors::{RegressionError, Result};
use crate::primitives::matrix::Matrix;

/// Solve `A * X = rhs` where `lu` factors `A`.
///
/// # Errors
///
/// `InvalidDimensions` when `rhs.rows()` differs from the order of `A`.
pub fn solve<T: Float>(lu: &LuDecomposition<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    let n = lu.size();
    if rhs.rows() != n {
        return Err(RegressionError::InvalidDimensions {
            left_rows: n,
            left_cols: n,
            right_rows: rhs.rows(),
            right_cols: rhs.cols(),
        });
    }

    let mut result = Matrix::zeros(n, rhs.cols());
    let mut forward: Vec<T> = vec![T::zero(); n];

    for k in 0..rhs.cols() {
        forward_substitute(&lu.lower, &lu.pivots, rhs, k, &mut forward);
        backward_substitute(&lu.upper, &forward, &mut result, k);
    }

    Ok(result)
}

/// Solve `L * D = P * R[.., k]` into `out`.
fn forward_substitute<T: Float>(
    lower: &Matrix<T>,
    pivots: &[usize],
    rhs: &Matrix<T>,
    k: usize,
    out: &mut [T],
) {
    for i in 0..out.len() {
        let sum = (0..i).fold(T::zero(), |acc, j| acc + lower[(i, j)] * out[j]);
        out[i] = (rhs[(pivots[i], k)] - sum) / lower[(i, i)];
    }
}

/// Solve `U * X[.., k] = D` in place.
fn backward_substitute<T: Float>(upper: &Matrix<T>, d: &[T], x: &mut Matrix<T>, k: usize) {
    let n = d.len();
    for i in (0..n).rev() {
        let sum = (i + 1..n).fold(T::zero(), |acc, j| acc + upper[(i, j)] * x[(j, k)]);
        x[(i, k)] = d[i] - sum;
    }
}
