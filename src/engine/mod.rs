//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fits: it validates input, dispatches to the
//! algorithm for the selected strategy, and packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit pipeline driver.
pub mod executor;

/// Fit results and rendering.
pub mod output;

/// Input and configuration validation.
pub mod validator;
