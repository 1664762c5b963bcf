//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module defines `Matrix<T>`, the dense 2-D container used by every
//! numerical routine in the crate: design matrices, normal equations, LU
//! factors and right-hand sides.
//!
//! ## Design notes
//!
//! * **Storage**: A single contiguous `Vec<T>` in row-major order.
//! * **Indexing**: `matrix[(row, col)]`, both zero-based.
//! * **Rectangular**: Construction rejects ragged rows, so every `Matrix`
//!   value has a well-defined shape.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols`.
//!
//! ## Non-goals
//!
//! * This module does not provide sparse or strided views.
//! * Arithmetic lives in `math::matrix`, not here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::{Index, IndexMut};
use num_traits::Float;

use crate::primitives::errors::{RegressionError, Result};

// ============================================================================
// Matrix
// ============================================================================

/// Dense matrix of real numbers stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Wrap a row-major buffer.
    ///
    /// Fails with `InvalidDimensions` when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(RegressionError::InvalidDimensions {
                left_rows: rows,
                left_cols: cols,
                right_rows: data.len(),
                right_cols: 1,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have the same length as the first; ragged input fails
    /// with `InvalidDimensions`.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for row in rows {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(RegressionError::InvalidDimensions {
                    left_rows: n_rows,
                    left_cols: n_cols,
                    right_rows: 1,
                    right_cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Build an `n x 1` column matrix.
    pub fn column_vector(values: &[T]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Build a `1 x n` row matrix.
    pub fn row_vector(values: &[T]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Borrow one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow one row.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Borrow the row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; a 0-column matrix has no data anyway
        self.data.chunks(self.cols.max(1))
    }
}

impl<T: Copy> Matrix<T> {
    /// Copy one column out.
    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.data[r * self.cols + col]).collect()
    }

    /// Build a new matrix whose row `i` is row `order[i]` of `self`.
    pub fn permute_rows(&self, order: &[usize]) -> Self {
        let mut data = Vec::with_capacity(order.len() * self.cols);
        for &src in order {
            data.extend_from_slice(self.row(src));
        }
        Self {
            rows: order.len(),
            cols: self.cols,
            data,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}
