//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer wraps the engine in the two execution modes the crate offers:
//! - `batch`: immutable configuration, one result per call
//! - `stateful`: a polynomial model that remembers its last fit
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot fitting.
pub mod batch;

/// Stateful polynomial model.
pub mod stateful;
