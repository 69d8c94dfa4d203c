//! Elementwise sequence operations.
//!
//! The arithmetic group (`add`/`sub`/`mul`/`scale`) propagates NaN strictly.
//! `div` additionally maps a zero denominator to NaN — an undefined ratio is
//! data insufficiency, not an error. `maximum`/`minimum` are the documented
//! exception to strict propagation: a lone NaN operand is replaced by the
//! other side.

use crate::error::{Result, SeriesError};

pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(SeriesError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Elementwise absolute value (ABS).
pub fn abs(s: &[f64]) -> Vec<f64> {
    s.iter().map(|v| v.abs()).collect()
}

/// Elementwise maximum of two sequences (MAX).
///
/// If exactly one operand at an index is NaN, the result is the other
/// operand — NaN does not propagate here. `f64::max` already carries that
/// contract, returning the non-NaN argument when one side is NaN.
pub fn maximum(s1: &[f64], s2: &[f64]) -> Result<Vec<f64>> {
    ensure_same_len(s1.len(), s2.len())?;
    Ok(s1.iter().zip(s2).map(|(&a, &b)| a.max(b)).collect())
}

/// Elementwise minimum of two sequences (MIN). Same NaN rule as [`maximum`].
pub fn minimum(s1: &[f64], s2: &[f64]) -> Result<Vec<f64>> {
    ensure_same_len(s1.len(), s2.len())?;
    Ok(s1.iter().zip(s2).map(|(&a, &b)| a.min(b)).collect())
}

/// Elementwise sum, strict NaN.
pub fn add(s1: &[f64], s2: &[f64]) -> Result<Vec<f64>> {
    ensure_same_len(s1.len(), s2.len())?;
    Ok(s1.iter().zip(s2).map(|(&a, &b)| a + b).collect())
}

/// Elementwise difference, strict NaN.
pub fn sub(s1: &[f64], s2: &[f64]) -> Result<Vec<f64>> {
    ensure_same_len(s1.len(), s2.len())?;
    Ok(s1.iter().zip(s2).map(|(&a, &b)| a - b).collect())
}

/// Elementwise product, strict NaN.
pub fn mul(s1: &[f64], s2: &[f64]) -> Result<Vec<f64>> {
    ensure_same_len(s1.len(), s2.len())?;
    Ok(s1.iter().zip(s2).map(|(&a, &b)| a * b).collect())
}

/// Elementwise ratio; NaN where either operand is NaN or the denominator is
/// zero.
pub fn div(s1: &[f64], s2: &[f64]) -> Result<Vec<f64>> {
    ensure_same_len(s1.len(), s2.len())?;
    Ok(s1
        .iter()
        .zip(s2)
        .map(|(&a, &b)| if b == 0.0 { f64::NAN } else { a / b })
        .collect())
}

/// Multiply every element by a scalar, strict NaN.
pub fn scale(s: &[f64], k: f64) -> Vec<f64> {
    s.iter().map(|v| v * k).collect()
}

/// Elementwise selection (IF): `on_true[i]` where `cond[i]`, else
/// `on_false[i]`. All three sequences must share one length.
pub fn if_else<T: Copy>(cond: &[bool], on_true: &[T], on_false: &[T]) -> Result<Vec<T>> {
    ensure_same_len(cond.len(), on_true.len())?;
    ensure_same_len(cond.len(), on_false.len())?;
    Ok(cond
        .iter()
        .zip(on_true.iter().zip(on_false))
        .map(|(&c, (&t, &f))| if c { t } else { f })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{assert_seq, DEFAULT_EPSILON};

    #[test]
    fn abs_elementwise() {
        assert_seq(
            &abs(&[1.0, -2.0, 3.0, -4.0, 0.0, -0.5]),
            &[1.0, 2.0, 3.0, 4.0, 0.0, 0.5],
            DEFAULT_EPSILON,
        );
        assert!(abs(&[]).is_empty());
    }

    #[test]
    fn abs_keeps_nan() {
        assert!(abs(&[f64::NAN])[0].is_nan());
    }

    #[test]
    fn maximum_elementwise() {
        let out = maximum(&[1.0, 5.0, 2.0], &[3.0, 4.0, 6.0]).unwrap();
        assert_seq(&out, &[3.0, 5.0, 6.0], DEFAULT_EPSILON);
    }

    #[test]
    fn maximum_replaces_lone_nan() {
        // NaN is replaced by the other operand, not propagated.
        let out = maximum(&[1.0, 5.0, f64::NAN], &[3.0, 4.0, 6.0]).unwrap();
        assert_seq(&out, &[3.0, 5.0, 6.0], DEFAULT_EPSILON);
        let out = maximum(&[f64::NAN], &[f64::NAN]).unwrap();
        assert!(out[0].is_nan()); // both sides undefined stays undefined
    }

    #[test]
    fn minimum_elementwise_and_nan() {
        let out = minimum(&[1.0, 5.0, 2.0], &[3.0, 4.0, 6.0]).unwrap();
        assert_seq(&out, &[1.0, 4.0, 2.0], DEFAULT_EPSILON);
        let out = minimum(&[1.0, 5.0, f64::NAN], &[3.0, 4.0, 6.0]).unwrap();
        assert_seq(&out, &[1.0, 4.0, 6.0], DEFAULT_EPSILON);
    }

    #[test]
    fn length_mismatch_is_usage_error() {
        let err = maximum(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, crate::SeriesError::LengthMismatch { left: 2, right: 1 });
        assert!(add(&[1.0], &[]).is_err());
        assert!(div(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn arithmetic_propagates_nan_strictly() {
        assert!(add(&[f64::NAN], &[1.0]).unwrap()[0].is_nan());
        assert!(sub(&[1.0], &[f64::NAN]).unwrap()[0].is_nan());
        assert!(mul(&[f64::NAN], &[0.0]).unwrap()[0].is_nan());
        assert!(scale(&[f64::NAN], 2.0)[0].is_nan());
    }

    #[test]
    fn div_zero_denominator_is_nan() {
        let out = div(&[1.0, 4.0, 5.0], &[0.0, 2.0, f64::NAN]).unwrap();
        assert!(out[0].is_nan());
        assert_eq!(out[1], 2.0);
        assert!(out[2].is_nan());
    }

    #[test]
    fn if_else_selects() {
        let out = if_else(
            &[true, false, true, false],
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();
        assert_seq(&out, &[1.0, 6.0, 3.0, 8.0], DEFAULT_EPSILON);
    }

    #[test]
    fn if_else_checks_all_three_lengths() {
        assert!(if_else(&[true], &[1.0], &[1.0, 2.0]).is_err());
        assert!(if_else(&[true, false], &[1.0], &[1.0, 2.0]).is_err());
    }
}
