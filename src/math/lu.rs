//! LU decomposition with row-ratio partial pivoting.
//!
//! ## Purpose
//!
//! This module factors a square matrix `A` into a lower-triangular `L`, a
//! unit upper-triangular `U` and a row permutation `P` such that
//! `L * U = P * A`. It is the workhorse behind the normal-equation solve.
//!
//! ## Design notes
//!
//! * **Crout form**: The pivot value stays on the diagonal of `L`; `U` has a
//!   unit diagonal.
//! * **Virtual row swaps**: Rows of the working matrix are never moved. Only
//!   the pivot array is permuted, and rows are addressed through it.
//! * **Ratio pivoting**: Each candidate row is scored by
//!   `|W[row][i]| / Σ_{k>=i} |W[row][k]|`, the share of the remaining row
//!   carried by the pivot entry. The row with the greatest share wins.
//! * **Fail-Fast**: A zero row remainder or a zero pivot stops the
//!   factorization with `SingularMatrix` instead of producing NaN/Inf.
//!
//! ## Key concepts
//!
//! * **Pivot array**: `pivots[i]` is the original row placed at position `i`.
//! * **Row remainder**: the entries of a working row from the pivot column on.
//!
//! ## Invariants
//!
//! * `pivots` is a permutation of `0..n`.
//! * `lower[(i, j)] == 0` for `j > i`; `upper[(i, i)] == 1` and
//!   `upper[(i, j)] == 0` for `j < i`.
//!
//! ## Non-goals
//!
//! * This module does not estimate condition numbers.
//! * This module does not handle rectangular systems.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use log::trace;
use num_traits::Float;

use crate::math::matrix::multiply;
use crate::math::substitution;
use crate::primitives::errors::{RegressionError, Result};
use crate::primitives::matrix::Matrix;

// ============================================================================
// LU Decomposition
// ============================================================================

/// Result of [`decompose`]: `lower * upper == A` with rows taken in `pivots` order.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T> {
    /// Lower-triangular factor; diagonal holds the pivot values.
    pub lower: Matrix<T>,

    /// Unit upper-triangular factor.
    pub upper: Matrix<T>,

    /// Row permutation: position `i` holds original row `pivots[i]`.
    pub pivots: Vec<usize>,
}

impl<T: Float> LuDecomposition<T> {
    /// Order of the factored matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.pivots.len()
    }

    /// Solve `A * X = rhs` using this factorization.
    pub fn solve(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        substitution::solve(self, rhs)
    }

    /// Recompute `L * U`, which equals the input with its rows permuted by `pivots`.
    pub fn reconstruct(&self) -> Result<Matrix<T>> {
        multiply(&self.lower, &self.upper)
    }
}

/// Factor a square matrix.
///
/// # Errors
///
/// * `EmptyInput` for a 0x0 matrix.
/// * `NotSquare` when rows and columns differ.
/// * `SingularMatrix` when a pivot column has no usable row.
pub fn decompose<T: Float>(matrix: &Matrix<T>) -> Result<LuDecomposition<T>> {
    if !matrix.is_square() {
        return Err(RegressionError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    let n = matrix.rows();
    if n == 0 {
        return Err(RegressionError::EmptyInput);
    }

    let mut upper = matrix.clone();
    let mut lower = Matrix::zeros(n, n);
    let mut pivots: Vec<usize> = (0..n).collect();

    for i in 0..n {
        // Step 1: Pick the pivot row for column i
        let best = select_pivot(&upper, &pivots, i)?;
        if best != i {
            pivots.swap(i, best);
        }
        trace!("LU column {}: pivot row {} (position {})", i, pivots[i], best);

        // Step 2: Normalize the pivot row
        let p = pivots[i];
        let pivot = upper[(p, i)];
        if pivot == T::zero() || !pivot.is_finite() {
            return Err(RegressionError::SingularMatrix { column: i });
        }
        for j in 0..n {
            if j < i {
                upper[(p, j)] = T::zero();
            } else if j == i {
                lower[(p, j)] = pivot;
                upper[(p, j)] = T::one();
            } else {
                upper[(p, j)] = upper[(p, j)] / pivot;
            }
        }

        // Step 3: Eliminate column i from the rows below
        for &q in &pivots[i + 1..] {
            let factor = upper[(q, i)];
            for j in 0..n {
                if j < i {
                    upper[(q, j)] = T::zero();
                } else if j == i {
                    lower[(q, j)] = factor;
                    upper[(q, j)] = T::zero();
                } else {
                    let v = upper[(p, j)];
                    upper[(q, j)] = upper[(q, j)] - factor * v;
                }
            }
        }
    }

    Ok(LuDecomposition {
        lower: lower.permute_rows(&pivots),
        upper: upper.permute_rows(&pivots),
        pivots,
    })
}

/// Return the position in `i..n` whose row has the greatest pivot ratio.
///
/// Ties keep the earliest position.
fn select_pivot<T: Float>(working: &Matrix<T>, pivots: &[usize], i: usize) -> Result<usize> {
    let n = pivots.len();
    let mut best_ratio = T::neg_infinity();
    let mut best_pos = i;

    for (pos, &row) in pivots.iter().enumerate().skip(i) {
        let remainder = (i..n).fold(T::zero(), |acc, k| acc + working[(row, k)].abs());
        if remainder == T::zero() || !remainder.is_finite() {
            return Err(RegressionError::SingularMatrix { column: i });
        }

        let ratio = working[(row, i)].abs() / remainder;
        if ratio > best_ratio {
            best_ratio = ratio;
            best_pos = pos;
        }
    }

    Ok(best_pos)
}
