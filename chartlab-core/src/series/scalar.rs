//! Scalar utilities.

/// The nth-from-last element of a sequence (RET): n = 1 is the final value.
/// `None` when n is 0 or exceeds the length.
pub fn nth_last(s: &[f64], n: usize) -> Option<f64> {
    if n == 0 || n > s.len() {
        return None;
    }
    Some(s[s.len() - n])
}

/// Round half away from zero to `digits` decimal places (RD). Charting
/// platforms display three digits by default.
pub fn round_to(x: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (x * factor).round() / factor
}
