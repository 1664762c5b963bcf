//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks of the
//! least-squares solver:
//! - Dense matrix product and transpose
//! - LU decomposition with row-ratio pivoting
//! - Forward/backward substitution
//! - Sums of per-sample derived values
//!
//! These are reusable mathematical building blocks with no fitting-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Matrix multiply and transpose.
pub mod matrix;

/// LU decomposition.
pub mod lu;

/// Triangular solves over LU factors.
pub mod substitution;

/// Per-sample value extraction and summation.
pub mod summation;
