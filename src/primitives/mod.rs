//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures every other layer
//! builds on:
//! - Dense matrix storage
//! - The crate-wide error type
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types and the crate `Result` alias.
pub mod errors;

/// Dense row-major matrix.
pub mod matrix;
