//! Primitive sequence transforms.
//!
//! Stateless, pure functions over fixed-length `f64` (or `bool`) sequences,
//! index 0 = oldest observation. Shape-preserving transforms always return
//! the input length; "not enough history" is NaN (false in the boolean
//! domain), never a shorter vector.
//!
//! Two NaN policies coexist, per function:
//! - strict propagation (the default): any NaN touching a window or an
//!   arithmetic step makes that output index NaN;
//! - replacement in [`maximum`]/[`minimum`]: a lone NaN operand yields the
//!   other side. Composite indicators use this to zero-fill day-one gaps.
//!
//! Degenerate periods (0, or longer than the sequence) degrade to an all-NaN
//! or all-false output rather than raising. The only hard error is a length
//! mismatch between sequences passed together.

pub mod logic;
pub mod ops;
pub mod regress;
pub mod scalar;
pub mod shift;
pub mod smooth;
pub mod window;

pub use logic::{bars_since, count, cross, every, exist, last};
pub use ops::{abs, add, div, if_else, maximum, minimum, mul, scale, sub};
pub use regress::{forecast, slope, slope_line};
pub use scalar::{nth_last, round_to};
pub use shift::{diff, shift};
pub use smooth::{ema, rma};
pub use window::{avedev, highest, lowest, sma, stddev, sum};

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Compare a computed sequence against an expected one where NaN slots must
/// match exactly and defined slots must match within epsilon.
#[cfg(test)]
pub fn assert_seq(actual: &[f64], expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "sequence lengths differ");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "expected NaN at index {i}, got {a}");
        } else {
            assert!(
                (a - e).abs() < epsilon,
                "index {i}: actual={a}, expected={e}"
            );
        }
    }
}

/// Default epsilon for primitive and indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
