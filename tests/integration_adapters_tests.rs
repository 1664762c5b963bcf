//! Integration tests through the public API only.
//!
//! ## Test Organization
//!
//! 1. **Batch Builder** - defaults, strategies, validation
//! 2. **Functional API** - free functions in the prelude
//! 3. **End-to-End** - noisy data and single precision

use approx::{assert_abs_diff_eq, assert_relative_eq};
use polyreg_rs::prelude::*;

// ============================================================================
// Batch Builder Tests
// ============================================================================

/// Test that the builder defaults to a degree-4 polynomial.
#[test]
fn test_batch_defaults() {
    let model = Regression::<f64>::new().adapter(Batch).build().unwrap();
    assert_eq!(model.config().strategy, Polynomial);
    assert_eq!(model.config().degree, 4);

    // Quartic through five points
    let samples: Vec<(f64, f64)> = (-2..=2)
        .map(|i| {
            let x = i as f64;
            (x, x.powi(4) - x)
        })
        .collect();
    let result = model.fit(&samples).unwrap();
    let coeffs = result.coefficients();

    assert_eq!(coeffs.len(), 5);
    assert_abs_diff_eq!(coeffs[0], 0.0, epsilon = 1e-8);
    assert_relative_eq!(coeffs[1], -1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(coeffs[2], 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(coeffs[3], 0.0, epsilon = 1e-8);
    assert_relative_eq!(coeffs[4], 1.0, epsilon = 1e-8);
}

/// Test that the resolved configuration is nameable from the prelude.
#[test]
fn test_batch_config_from_prelude() {
    assert_eq!(DEFAULT_DEGREE, 4);

    let model = Regression::<f64>::new().adapter(Batch).build().unwrap();
    let config: &FitConfig = model.config();
    assert_eq!(*config, FitConfig::default());
    assert_eq!(config.degree, DEFAULT_DEGREE);

    let line: FitConfig = *Regression::<f64>::new()
        .strategy(SimpleLinear)
        .build()
        .unwrap()
        .config();
    assert_eq!(
        line,
        FitConfig {
            strategy: SimpleLinear,
            degree: 1,
        }
    );
}

/// Test the quadratic scenario end to end.
#[test]
fn test_batch_quadratic() {
    let model = Regression::new().degree(2).adapter(Batch).build().unwrap();
    let result = model
        .fit(&[(0.0_f64, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)])
        .unwrap();

    assert_eq!(result.degree, 2);
    assert_eq!(result.n_samples, 4);
    assert_relative_eq!(result.evaluate(4.0), 17.0, epsilon = 1e-8);
}

/// Test that `build()` on the generic builder selects the batch adapter.
#[test]
fn test_build_shortcut() {
    let model = Regression::<f64>::new()
        .strategy(SimpleLinear)
        .build()
        .unwrap();
    let result = model.fit(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();

    assert_eq!(result.strategy(), SimpleLinear);
    match result.model {
        FittedModel::Linear(line) => {
            assert_relative_eq!(line.slope, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(line.intercept, 0.0, epsilon = 1e-12);
        }
        FittedModel::Polynomial(_) => panic!("expected a line"),
    }
}

/// Test strategy/degree conflicts.
#[test]
fn test_batch_invalid_degree() {
    let result = Regression::<f64>::new()
        .strategy(SimpleLinear)
        .degree(3)
        .adapter(Batch)
        .build();
    assert_eq!(
        result.unwrap_err(),
        RegressionError::InvalidDegree {
            degree: 3,
            strategy: SimpleLinear,
        }
    );

    // Degree 1 is consistent with a line
    assert!(
        Regression::<f64>::new()
            .strategy(SimpleLinear)
            .degree(1)
            .adapter(Batch)
            .build()
            .is_ok()
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_batch_duplicate_strategy() {
    let result = Regression::<f64>::new()
        .strategy(Polynomial)
        .strategy(SimpleLinear)
        .adapter(Batch)
        .build();
    assert_eq!(
        result.unwrap_err(),
        RegressionError::DuplicateParameter {
            parameter: "strategy"
        }
    );
}

/// Test that a built model can be reused across data sets.
#[test]
fn test_batch_reuse() {
    let model = Regression::new().degree(1).adapter(Batch).build().unwrap();
    let a = model.fit(&[(0.0_f64, 0.0), (1.0, 2.0)]).unwrap();
    let b = model.fit(&[(0.0_f64, 5.0), (1.0, 4.0)]).unwrap();

    assert_relative_eq!(a.evaluate(2.0), 4.0, epsilon = 1e-12);
    assert_relative_eq!(b.evaluate(2.0), 3.0, epsilon = 1e-12);
}

/// Test error propagation from a batch fit.
#[test]
fn test_batch_fit_errors() {
    let model = Regression::<f64>::new().degree(2).build().unwrap();
    assert_eq!(model.fit(&[]).unwrap_err(), RegressionError::EmptyInput);
    assert_eq!(
        model.fit(&[(1.0, 2.0), (3.0, 4.0)]).unwrap_err(),
        RegressionError::InsufficientSamples { got: 2, min: 3 }
    );
}

// ============================================================================
// Functional API Tests
// ============================================================================

/// Test the free functions.
#[test]
fn test_functional_api() {
    let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    let product = matrix_multiply(&a, &Matrix::identity(2)).unwrap();
    assert_eq!(product, a);
    assert_eq!(matrix_transpose(&a).as_slice(), &[1.0, 3.0, 2.0, 4.0]);

    let lu = lu_decompose(&a).unwrap();
    let x = lu.solve(&Matrix::column_vector(&[5.0, 11.0])).unwrap();
    assert_relative_eq!(x[(0, 0)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], 2.0, epsilon = 1e-12);

    let line = simple_linear_fit(&[(1.0_f64, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
    assert_relative_eq!(line.slope, 1.0, epsilon = 1e-12);

    let coeffs = fit_polynomial(&[(0.0_f64, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)], 2).unwrap();
    assert_relative_eq!(coeffs[2], 1.0, epsilon = 1e-9);
}

/// Test functional error cases.
#[test]
fn test_functional_api_errors() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    assert!(matches!(
        matrix_multiply(&a, &a),
        Err(RegressionError::InvalidDimensions { .. })
    ));
    assert_eq!(
        lu_decompose(&a).unwrap_err(),
        RegressionError::NotSquare { rows: 2, cols: 3 }
    );
    assert_eq!(
        simple_linear_fit(&[(1.0_f64, 1.0), (1.0, 3.0)]).unwrap_err(),
        RegressionError::DegenerateInput
    );
}

// ============================================================================
// End-to-End Tests
// ============================================================================

/// Test that degree 1 agrees with the closed-form line on noisy data.
#[test]
fn test_degree_one_matches_linear() {
    let samples = [
        (0.5_f64, 1.9),
        (1.5, 4.2),
        (2.5, 5.8),
        (3.5, 8.3),
        (4.5, 9.7),
        (5.5, 12.4),
    ];
    let poly = fit_polynomial(&samples, 1).unwrap();
    let line = simple_linear_fit(&samples).unwrap();

    assert_relative_eq!(poly[0], line.intercept, epsilon = 1e-9);
    assert_relative_eq!(poly[1], line.slope, epsilon = 1e-9);
}

/// Test single-precision fitting.
#[test]
fn test_f32_quadratic() {
    let model = Regression::<f32>::new().degree(2).build().unwrap();
    let result = model
        .fit(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)])
        .unwrap();
    assert_relative_eq!(result.evaluate(4.0), 17.0, epsilon = 1e-3);
}

/// Test that batch results evaluate unchecked while the stateful model rejects non-finite input.
#[test]
fn test_non_finite_evaluation_policy() {
    let samples = [(0.0_f64, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)];

    let result = Regression::new().degree(2).build().unwrap().fit(&samples).unwrap();
    assert!(result.evaluate(f64::NAN).is_nan());
    assert!(result.model.evaluate(f64::NAN).is_nan());
    assert!(!result.evaluate(f64::INFINITY).is_finite());
    assert!(result.evaluate_all(&[0.0, f64::NAN])[1].is_nan());

    let mut model = Regression::new().degree(2).adapter(Stateful).build().unwrap();
    model.fit_default(&samples).unwrap();
    assert!(matches!(
        model.evaluate(f64::NAN),
        Err(RegressionError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        model.evaluate(f64::INFINITY),
        Err(RegressionError::InvalidNumericValue(_))
    ));
}

/// Test strategy parsing from configuration strings.
#[test]
fn test_strategy_from_config_string() {
    let strategy: FitStrategy = "poly".parse().unwrap();
    let model = Regression::<f64>::new()
        .strategy(strategy)
        .degree(2)
        .build()
        .unwrap();
    assert_eq!(model.config().strategy, Polynomial);
    assert!("spline".parse::<FitStrategy>().is_err());
}
