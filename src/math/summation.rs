//! Per-sample derived values and their sums.
//!
//! Both fitting strategies reduce a sample set to sums of a derived quantity
//! (`x`, `x * x`, `x * y`, ...). The quantity is an ordinary closure over one
//! `(x, y)` sample.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

/// Map every sample through `f`.
#[inline]
pub fn values_by<T, F>(samples: &[(T, T)], f: F) -> Vec<T>
where
    T: Float,
    F: Fn(&(T, T)) -> T,
{
    samples.iter().map(f).collect()
}

/// Sum `f` over every sample.
///
/// ```text
/// sum_by(samples, |&(x, y)| x * y) = Σ x_i * y_i
/// ```
#[inline]
pub fn sum_by<T, F>(samples: &[(T, T)], f: F) -> T
where
    T: Float,
    F: Fn(&(T, T)) -> T,
{
    samples.iter().fold(T::zero(), |acc, s| acc + f(s))
}
