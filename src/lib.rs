//! # polyreg: Least-Squares Curve Fitting for Rust
//!
//! A small, dependency-light library that fits a curve to a set of 2-D
//! sample points. Two fitting strategies are available:
//!
//! - **Simple linear regression**: the closed-form least-squares line
//!   `y = intercept + slope * x`.
//! - **Polynomial regression**: a least-squares polynomial of any degree,
//!   obtained by solving the normal equations `(ZᵗZ)·c = Zᵗy` with an LU
//!   decomposition that pivots on the largest row ratio.
//!
//! ## How polynomial fitting works
//!
//! 1. Build the design matrix `Z`, one row per sample, one column per power
//!    of x from 0 to `degree`.
//! 2. Form the normal equations `ZᵗZ` (square, `degree + 1` wide) and `Zᵗy`.
//! 3. Decompose `ZᵗZ` into `L·U` under a row permutation `P`.
//! 4. Recover the coefficients by forward then backward substitution.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! let samples = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)];
//!
//! // Build the model
//! let model = Regression::new()
//!     .degree(2)          // Quadratic fit
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&samples)?;
//!
//! println!("{}", result);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 4
//!   Strategy: polynomial
//!   Degree: 2
//!
//! Formula:
//!   y = 1.000000 + 0.000000*x + 1.000000*x^2
//!
//! Coefficients:
//!    Power      Coefficient
//!   -----------------------
//!        0         1.000000
//!        1         0.000000
//!        2         1.000000
//! ```
//!
//! ### Simple Linear Regression
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! let samples = vec![(1.0_f64, 1.0), (2.0, 2.0), (3.0, 3.0)];
//!
//! let model = Regression::new()
//!     .strategy(SimpleLinear)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&samples)?;
//! assert!((result.evaluate(10.0) - 10.0).abs() < 1e-9);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Stateful Model
//!
//! A [`PolynomialRegression`](prelude::PolynomialRegression) keeps the
//! coefficients of its last successful fit and evaluates them on demand. A
//! failed fit leaves the previous coefficients in place.
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! let mut model = Regression::<f64>::new()
//!     .degree(2)
//!     .adapter(Stateful)
//!     .build()?;
//!
//! // Not fitted yet
//! assert!(matches!(model.evaluate(1.0), Err(RegressionError::NotFitted)));
//!
//! model.fit(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)], 2)?;
//! assert!((model.evaluate(4.0)? - 17.0).abs() < 1e-9);
//!
//! // Too few distinct x values: rejected, previous fit kept
//! assert!(model.fit(&[(1.0, 1.0), (1.0, 2.0)], 2).is_err());
//! assert!(model.is_fitted());
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, RegressionError>`:
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! // All x values identical: the line is undefined
//! match simple_linear_fit(&[(2.0_f64, 1.0), (2.0, 3.0)]) {
//!     Ok(line) => println!("slope = {}", line.slope),
//!     Err(e) => eprintln!("Fitting failed: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyreg-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: pipeline
//! milestones at `debug`, pivot selection at `trace` and rejected singular
//! systems at `warn`. No logger is installed by the library.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the dense `Matrix` type and the `RegressionError` enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains matrix multiply/transpose, LU decomposition with ratio-based
// pivoting, forward/backward substitution, and per-sample sums.
mod math;

// Layer 3: Algorithms - core fitting algorithms.
//
// Contains the design matrix and normal equations, the closed-form line,
// the polynomial engine, and the strategy enumeration.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, the fit pipeline driver, and result assembly.
mod engine;

// Layer 5: Adapters - execution mode adapters.
//
// Contains execution adapters for different use cases:
// batch (one-shot) and stateful (remembers the last fit).
mod adapters;

// High-level fluent API for curve fitting.
//
// Provides the `Regression` builder and plain functional entry points.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Stateful},
        BatchRegression, DEFAULT_DEGREE, FitConfig, FitResult,
        FitStrategy::{Polynomial, SimpleLinear},
        FitStrategy, FittedModel, LinearFit, LuDecomposition, Matrix, PolynomialRegression,
        RegressionBuilder as Regression, RegressionError, fit_polynomial, lu_decompose,
        matrix_multiply, matrix_transpose, simple_linear_fit,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
