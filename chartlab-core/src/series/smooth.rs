//! Recursive smoothers.
//!
//! Unlike the trailing-window family these carry an accumulator forward, so
//! their warm-up and NaN behavior differ: EMA produces output from the first
//! defined sample, RMA keeps the windowed n-1 warm-up.

/// Exponential moving average (EMA), alpha = 2/(n+1).
///
/// The accumulator seeds with the first *defined* sample: leading NaNs stay
/// NaN and a defined head seeds at index 0. A NaN after seeding taints its
/// own index and the accumulator re-seeds at the next defined sample. KDJ
/// feeds this a sequence with an undefined warm-up region and depends on the
/// re-seed.
pub fn ema(s: &[f64], n: usize) -> Vec<f64> {
    let len = s.len();
    let mut out = vec![f64::NAN; len];
    if n == 0 || n > len {
        return out;
    }
    let alpha = 2.0 / (n as f64 + 1.0);
    let mut acc = f64::NAN;
    for (i, &v) in s.iter().enumerate() {
        acc = if acc.is_nan() {
            v
        } else {
            alpha * v + (1.0 - alpha) * acc
        };
        out[i] = acc;
    }
    out
}

/// Recursive weighted moving average — SMA(X,N,M) in TDX formula language.
///
/// Indices below n-1 are NaN; the seed at n-1 is the plain mean of the first
/// n samples; afterwards `out[i] = (m*s[i] + (n-m)*out[i-1]) / n`. Strict
/// NaN: a tainted accumulator never re-seeds.
pub fn rma(s: &[f64], n: usize, m: usize) -> Vec<f64> {
    let len = s.len();
    let mut out = vec![f64::NAN; len];
    if n == 0 || m == 0 || n > len {
        return out;
    }
    let (nf, mf) = (n as f64, m as f64);
    let mut acc = s[..n].iter().sum::<f64>() / nf;
    out[n - 1] = acc;
    for i in n..len {
        acc = (mf * s[i] + (nf - mf) * acc) / nf;
        out[i] = acc;
    }
    out
}
