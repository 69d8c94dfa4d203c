//! Ordinary least squares over the trailing window.
//!
//! All three functions fit the *last* n samples of the sequence against
//! x = 0..n-1. A NaN inside the window flows through the normal equations
//! and surfaces as a NaN result.

/// Slope and intercept of the OLS fit over the trailing n samples.
fn fit(s: &[f64], n: usize) -> Option<(f64, f64)> {
    if n <= 1 || n > s.len() {
        return None;
    }
    let window = &s[s.len() - n..];
    let nf = n as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in window.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let slope = (nf * sum_xy - sum_x * sum_y) / (nf * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / nf;
    Some((slope, intercept))
}

/// OLS slope of the trailing n samples (SLOPE). NaN when n <= 1 or n exceeds
/// the length.
pub fn slope(s: &[f64], n: usize) -> f64 {
    fit(s, n).map(|(m, _)| m).unwrap_or(f64::NAN)
}

/// The n fitted values of the trailing-window OLS line (SLOPE with the
/// return-line flag). Empty when degenerate — there is no line to return.
pub fn slope_line(s: &[f64], n: usize) -> Vec<f64> {
    match fit(s, n) {
        Some((m, b)) => (0..n).map(|x| m * x as f64 + b).collect(),
        None => Vec::new(),
    }
}

/// Trailing-window OLS fit evaluated one step past the window, x = n
/// (FORCAST). NaN when degenerate.
pub fn forecast(s: &[f64], n: usize) -> f64 {
    fit(s, n).map(|(m, b)| m * n as f64 + b).unwrap_or(f64::NAN)
}
