#![cfg(feature = "dev")]
//! Tests for the dense matrix container.
//!
//! ## Test Organization
//!
//! 1. **Construction** - zeros, identity, from_rows, from_vec, vectors
//! 2. **Access** - indexing, rows, columns, permutation

use polyreg_rs::internals::primitives::errors::RegressionError;
use polyreg_rs::internals::primitives::matrix::Matrix;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test zero and identity constructors.
#[test]
fn test_zeros_and_identity() {
    let z: Matrix<f64> = Matrix::zeros(2, 3);
    assert_eq!(z.shape(), (2, 3));
    assert!(z.as_slice().iter().all(|&v| v == 0.0));
    assert!(!z.is_square());

    let id: Matrix<f64> = Matrix::identity(3);
    assert!(id.is_square());
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(id[(i, j)], expected);
        }
    }
}

/// Test building from nested rows.
#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

/// Test that ragged rows are rejected.
#[test]
fn test_from_rows_ragged() {
    let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
    let result = Matrix::from_rows(&rows);
    assert_eq!(
        result,
        Err(RegressionError::InvalidDimensions {
            left_rows: 2,
            left_cols: 2,
            right_rows: 1,
            right_cols: 1,
        })
    );
}

/// Test that an empty row list yields an empty matrix.
#[test]
fn test_from_rows_empty() {
    let rows: Vec<Vec<f64>> = Vec::new();
    let m = Matrix::from_rows(&rows).unwrap();
    assert!(m.is_empty());
    assert_eq!(m.shape(), (0, 0));
}

/// Test from_vec length checking.
#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(1, 1)], 4.0);

    let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, RegressionError::InvalidDimensions { .. }));
}

/// Test row and column vector helpers.
#[test]
fn test_vectors() {
    let c = Matrix::column_vector(&[1.0_f64, 2.0, 3.0]);
    assert_eq!(c.shape(), (3, 1));
    assert_eq!(c[(2, 0)], 3.0);

    let r = Matrix::row_vector(&[1.0_f64, 2.0, 3.0]);
    assert_eq!(r.shape(), (1, 3));
    assert_eq!(r[(0, 1)], 2.0);
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test row, column and iteration helpers.
#[test]
fn test_row_and_column_access() {
    let mut m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    assert_eq!(m.row(1), &[3.0, 4.0]);
    assert_eq!(m.column(1), vec![2.0, 4.0, 6.0]);

    m.row_mut(0)[1] = 9.0;
    m[(2, 0)] = -1.0;
    assert_eq!(m[(0, 1)], 9.0);

    let rows: Vec<&[f64]> = m.iter_rows().collect();
    assert_eq!(rows, vec![&[1.0, 9.0][..], &[3.0, 4.0][..], &[-1.0, 6.0][..]]);
}

/// Test row permutation.
#[test]
fn test_permute_rows() {
    let m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    let p = m.permute_rows(&[2, 0, 1]);
    assert_eq!(p.as_slice(), &[5.0, 6.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.into_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
