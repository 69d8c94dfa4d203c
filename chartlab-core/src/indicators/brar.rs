//! BRAR — sentiment indicators AR (intraday) and BR (interday).
//!
//! AR = SUM(high - open, m1) / SUM(open - low, m1) * 100
//! BR = SUM(MAX(high - REF(close,1), 0), m1)
//!    / SUM(MAX(REF(close,1) - low, 0), m1) * 100
//!
//! BR's day-one legs are undefined; the MAX zero-fill keeps the sums defined
//! from the first full window, exactly like RSI's day-one diff.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{div, maximum, scale, shift, sub, sum};

/// Period for [`brar`]. Conventional default: 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrarParams {
    pub m1: usize,
}

impl Default for BrarParams {
    fn default() -> Self {
        Self { m1: 26 }
    }
}

/// Output of [`brar`], aligned to the input sequences.
#[derive(Debug, Clone)]
pub struct BrarOutput {
    pub ar: Vec<f64>,
    pub br: Vec<f64>,
}

pub fn brar(
    open: &[f64],
    close: &[f64],
    high: &[f64],
    low: &[f64],
    params: BrarParams,
) -> Result<BrarOutput> {
    ensure_same_len(open.len(), close.len())?;
    ensure_same_len(open.len(), high.len())?;
    ensure_same_len(open.len(), low.len())?;
    let zeros = vec![0.0; open.len()];

    let ar = scale(
        &div(
            &sum(&sub(high, open)?, params.m1),
            &sum(&sub(open, low)?, params.m1),
        )?,
        100.0,
    );

    let prev_close = shift(close, 1);
    let br = scale(
        &div(
            &sum(&maximum(&sub(high, &prev_close)?, &zeros)?, params.m1),
            &sum(&maximum(&sub(&prev_close, low)?, &zeros)?, params.m1),
        )?,
        100.0,
    );

    Ok(BrarOutput { ar, br })
}
