#![cfg(feature = "dev")]

use polyreg_rs::internals::algorithms::strategy::FitStrategy;
use polyreg_rs::internals::primitives::errors::RegressionError;

#[test]
fn test_regression_error_display() {
    // EmptyInput
    let err = RegressionError::EmptyInput;
    assert_eq!(format!("{}", err), "Input is empty");

    // InvalidDimensions
    let err = RegressionError::InvalidDimensions {
        left_rows: 2,
        left_cols: 3,
        right_rows: 2,
        right_cols: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid dimensions: cannot combine 2x3 with 2x2"
    );

    // NotSquare
    let err = RegressionError::NotSquare { rows: 2, cols: 3 };
    assert_eq!(format!("{}", err), "Matrix is not square: 2x3");

    // SingularMatrix
    let err = RegressionError::SingularMatrix { column: 1 };
    assert_eq!(
        format!("{}", err),
        "Matrix is singular: no usable pivot in column 1"
    );

    // DegenerateInput
    let err = RegressionError::DegenerateInput;
    assert_eq!(
        format!("{}", err),
        "Degenerate input: all x values are identical"
    );

    // NotFitted
    let err = RegressionError::NotFitted;
    assert_eq!(format!("{}", err), "Model has not been fitted");

    // InsufficientSamples
    let err = RegressionError::InsufficientSamples { got: 2, min: 3 };
    assert_eq!(
        format!("{}", err),
        "Insufficient samples: got 2 distinct x values, need at least 3"
    );

    // InvalidNumericValue
    let err = RegressionError::InvalidNumericValue("x[0]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[0]=NaN");

    // InvalidDegree
    let err = RegressionError::InvalidDegree {
        degree: 3,
        strategy: FitStrategy::SimpleLinear,
    };
    assert_eq!(format!("{}", err), "Invalid degree 3 for linear strategy");

    // DuplicateParameter
    let err = RegressionError::DuplicateParameter {
        parameter: "degree",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter `degree` was set more than once"
    );

    // UnsupportedStrategy
    let err = RegressionError::UnsupportedStrategy {
        strategy: FitStrategy::SimpleLinear,
        adapter: "Stateful",
    };
    assert_eq!(
        format!("{}", err),
        "The Stateful adapter does not support the linear strategy"
    );

    // UnknownStrategy
    let err = RegressionError::UnknownStrategy("cubic".to_string());
    assert_eq!(format!("{}", err), "Unknown fitting strategy: cubic");
}

#[test]
fn test_regression_error_properties() {
    let err1 = RegressionError::NotFitted;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, RegressionError::EmptyInput);
    assert_ne!(
        RegressionError::SingularMatrix { column: 0 },
        RegressionError::SingularMatrix { column: 1 }
    );
}

#[cfg(feature = "std")]
#[test]
fn test_regression_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<RegressionError>();
}
