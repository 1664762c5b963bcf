//! Design matrix and normal equations for polynomial least squares.
//!
//! ## Purpose
//!
//! This module turns raw samples into the linear system whose solution is
//! the vector of polynomial coefficients.
//!
//! ## Key concepts
//!
//! * **Design matrix**: `Z[i][j] = x_i^j` for `j = 0..=degree`.
//! * **Normal equations**: `(Zᵗ Z) c = Zᵗ y`.
//!
//! ## Invariants
//!
//! * `Z` has one row per sample and `degree + 1` columns.
//! * `Zᵗ Z` is square and symmetric.

use num_traits::Float;

use crate::math::matrix::{multiply, transpose};
use crate::primitives::errors::Result;
use crate::primitives::matrix::Matrix;

/// Build the Vandermonde-style design matrix for `xs`.
///
/// Powers are accumulated by repeated multiplication, so `x^0` is exactly 1.
pub fn design_matrix<T: Float>(xs: &[T], degree: usize) -> Matrix<T> {
    let cols = degree + 1;
    let mut z = Matrix::zeros(xs.len(), cols);
    for (i, &x) in xs.iter().enumerate() {
        let mut x_pow = T::one();
        for j in 0..cols {
            z[(i, j)] = x_pow;
            x_pow = x_pow * x;
        }
    }
    z
}

/// Form the normal equations `(Zᵗ Z, Zᵗ y)` for design matrix `z` and responses `ys`.
pub fn normal_equations<T: Float>(z: &Matrix<T>, ys: &[T]) -> Result<(Matrix<T>, Matrix<T>)> {
    let z_t = transpose(z);
    let lhs = multiply(&z_t, z)?;
    let rhs = multiply(&z_t, &Matrix::column_vector(ys))?;
    Ok((lhs, rhs))
}
