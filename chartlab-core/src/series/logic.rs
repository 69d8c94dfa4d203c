//! Boolean-sequence logic: crossover detection and run counting.
//!
//! Boolean-domain warm-ups are `false`, not NaN; the numeric-valued [`count`]
//! keeps the NaN warm-up of the window family. NaN comparisons are false, so
//! an undefined price can never register as a crossing.

use crate::error::Result;
use crate::series::ops::ensure_same_len;

/// Crossover detection (CROSS). Index 0 is always false; index i >= 1 is true
/// iff `s1` crosses `s2` between i-1 and i in either direction (upward:
/// `s1[i] > s2[i]` and `s1[i-1] <= s2[i-1]`; downward: mirror).
pub fn cross(s1: &[f64], s2: &[f64]) -> Result<Vec<bool>> {
    ensure_same_len(s1.len(), s2.len())?;
    let len = s1.len();
    let mut out = vec![false; len];
    for i in 1..len {
        let up = s1[i] > s2[i] && s1[i - 1] <= s2[i - 1];
        let down = s1[i] < s2[i] && s1[i - 1] >= s2[i - 1];
        out[i] = up || down;
    }
    Ok(out)
}

/// Trailing-n count of true values (COUNT), as a numeric sequence: NaN for
/// i < n-1, and all-NaN for degenerate periods.
pub fn count(cond: &[bool], n: usize) -> Vec<f64> {
    let len = cond.len();
    let mut out = vec![f64::NAN; len];
    if n == 0 || n > len {
        return out;
    }
    let mut running = 0usize;
    for i in 0..len {
        if cond[i] {
            running += 1;
        }
        if i >= n && cond[i - n] {
            running -= 1;
        }
        if i >= n - 1 {
            out[i] = running as f64;
        }
    }
    out
}

/// Trailing-n all-true (EVERY). False (not NaN) for i < n-1 and for
/// degenerate periods.
pub fn every(cond: &[bool], n: usize) -> Vec<bool> {
    let len = cond.len();
    let mut out = vec![false; len];
    if n == 0 || n > len {
        return out;
    }
    for i in (n - 1)..len {
        out[i] = cond[i + 1 - n..=i].iter().all(|&c| c);
    }
    out
}

/// Trailing-n any-true (EXIST). Same warm-up policy as [`every`].
pub fn exist(cond: &[bool], n: usize) -> Vec<bool> {
    let len = cond.len();
    let mut out = vec![false; len];
    if n == 0 || n > len {
        return out;
    }
    for i in (n - 1)..len {
        out[i] = cond[i + 1 - n..=i].iter().any(|&c| c);
    }
    out
}

/// True iff the condition held over the whole window at offsets
/// [len-a, len-b) from the end (LAST: "from a bars ago through b bars ago").
/// Requires a >= b, else false; a beyond the length is false; a == b is an
/// empty window and vacuously true.
pub fn last(cond: &[bool], a: usize, b: usize) -> bool {
    let len = cond.len();
    if a < b || a > len {
        return false;
    }
    cond[len - a..len - b].iter().all(|&c| c)
}

/// Steps since the condition last held (BARSLAST): `Some(0)` when the final
/// element is true, `None` when it never held.
pub fn bars_since(cond: &[bool]) -> Option<usize> {
    cond.iter().rev().position(|&c| c)
}
