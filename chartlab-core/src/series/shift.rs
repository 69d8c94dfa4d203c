//! Shift and difference transforms.

/// Delay a sequence by `n` bars (REF): `out[i] = s[i-n]` for i >= n, NaN
/// before. `n = 0` is the identity.
///
/// Boundary asymmetry, preserved exactly: `n` equal to the length keeps the
/// oldest observation in the last slot, while `n` greater than the length is
/// entirely NaN.
pub fn shift(s: &[f64], n: usize) -> Vec<f64> {
    let len = s.len();
    if n > len {
        return vec![f64::NAN; len];
    }
    if n == len {
        let mut out = vec![f64::NAN; len];
        if let Some(slot) = out.last_mut() {
            *slot = s[0];
        }
        return out;
    }
    let mut out = vec![f64::NAN; n];
    out.extend_from_slice(&s[..len - n]);
    out
}

/// n-bar difference (DIFF): `out[i] = s[i] - s[i-n]` for i >= n, NaN before.
/// `n = 0` or `n >= len` degrades to all-NaN — unlike [`shift`], a zero
/// period is not the identity here.
pub fn diff(s: &[f64], n: usize) -> Vec<f64> {
    let len = s.len();
    let mut out = vec![f64::NAN; len];
    if n == 0 || n >= len {
        return out;
    }
    for i in n..len {
        out[i] = s[i] - s[i - n];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{assert_seq, DEFAULT_EPSILON};

    const NAN: f64 = f64::NAN;

    #[test]
    fn shift_basic() {
        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_seq(&shift(&s, 1), &[NAN, 1.0, 2.0, 3.0, 4.0], DEFAULT_EPSILON);
        assert_seq(&shift(&s, 3), &[NAN, NAN, NAN, 1.0, 2.0], DEFAULT_EPSILON);
    }

    #[test]
    fn shift_zero_is_identity() {
        let s = [1.0, 2.0, 3.0];
        assert_seq(&shift(&s, 0), &s, DEFAULT_EPSILON);
    }

    #[test]
    fn shift_boundary_asymmetry() {
        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        // n == len: the oldest observation survives in the last slot.
        assert_seq(&shift(&s, 5), &[NAN, NAN, NAN, NAN, 1.0], DEFAULT_EPSILON);
        // n > len: nothing survives.
        assert!(shift(&s, 6).iter().all(|v| v.is_nan()));
        assert_eq!(shift(&s, 6).len(), 5);
    }

    #[test]
    fn shift_empty() {
        assert!(shift(&[], 1).is_empty());
        assert!(shift(&[], 0).is_empty());
    }

    #[test]
    fn diff_basic() {
        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_seq(&diff(&s, 1), &[NAN, 1.0, 1.0, 1.0, 1.0], DEFAULT_EPSILON);
        assert_seq(&diff(&s, 2), &[NAN, NAN, 2.0, 2.0, 2.0], DEFAULT_EPSILON);
    }

    #[test]
    fn diff_degenerate_periods() {
        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(diff(&s, 0).iter().all(|v| v.is_nan()));
        // n == len is already degenerate for diff (contrast with shift).
        assert!(diff(&s, 5).iter().all(|v| v.is_nan()));
        assert!(diff(&[], 1).is_empty());
    }
}
