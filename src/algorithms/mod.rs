//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the fitting strategies on top of the math layer:
//! - Design matrix and normal-equation construction
//! - Polynomial least squares
//! - Closed-form simple linear regression
//! - The closed set of strategies and their fitted models
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Design matrix and normal equations.
pub mod design;

/// Closed-form straight-line fit.
pub mod linear;

/// Polynomial least squares and evaluation.
pub mod polynomial;

/// Strategy enumeration and fitted models.
pub mod strategy;
