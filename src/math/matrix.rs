//! Dense matrix products and transposition.
//!
//! ## Purpose
//!
//! This module provides the two matrix primitives needed to form the normal
//! equations of a least-squares fit: the dense product and the transpose.
//!
//! ## Design notes
//!
//! * **Checked**: `multiply` validates shapes up front and reports
//!   `InvalidDimensions` instead of reading out of bounds.
//! * **Allocating**: Both functions return a fresh matrix; inputs are never
//!   modified.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `multiply(a, b)` has shape `a.rows() x b.cols()`.
//! * `transpose(transpose(m)) == m`.
//!
//! ## Non-goals
//!
//! * This module does not use blocked or SIMD kernels.

use num_traits::Float;

use crate::primitives::errors::{RegressionError, Result};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Products
// ============================================================================

/// Dense matrix product `left * right`.
///
/// # Errors
///
/// `InvalidDimensions` when `left.cols() != right.rows()`.
pub fn multiply<T: Float>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>> {
    if left.cols() != right.rows() {
        return Err(RegressionError::InvalidDimensions {
            left_rows: left.rows(),
            left_cols: left.cols(),
            right_rows: right.rows(),
            right_cols: right.cols(),
        });
    }

    let mut out = Matrix::zeros(left.rows(), right.cols());
    for i in 0..left.rows() {
        let lhs = left.row(i);
        for j in 0..right.cols() {
            out[(i, j)] = lhs
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (k, &a)| acc + a * right[(k, j)]);
        }
    }

    Ok(out)
}

/// Return the transpose of `matrix`.
pub fn transpose<T: Float>(matrix: &Matrix<T>) -> Matrix<T> {
    let mut out = Matrix::zeros(matrix.cols(), matrix.rows());
    for (i, row) in matrix.iter_rows().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[(j, i)] = v;
        }
    }
    out
}
