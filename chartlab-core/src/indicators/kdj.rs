//! KDJ — stochastic oscillator, exponential variant.
//!
//! RSV = (close - LLV(low, n)) / (HHV(high, n) - LLV(low, n)) * 100
//! K = EMA(RSV, 2*m1 - 1)
//! D = EMA(K, 2*m2 - 1)
//! J = K*3 - D*2
//!
//! RSV carries an n-1 bar undefined warm-up and goes undefined on a flat
//! range; K depends on EMA seeding at the first defined RSV.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{div, ema, highest, lowest, scale, sub};

/// Periods for [`kdj`]. Conventional defaults: 9/3/3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdjParams {
    pub n: usize,
    pub m1: usize,
    pub m2: usize,
}

impl Default for KdjParams {
    fn default() -> Self {
        Self { n: 9, m1: 3, m2: 3 }
    }
}

/// Output of [`kdj`], aligned to the input sequences.
#[derive(Debug, Clone)]
pub struct KdjOutput {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
    pub j: Vec<f64>,
}

pub fn kdj(close: &[f64], high: &[f64], low: &[f64], params: KdjParams) -> Result<KdjOutput> {
    ensure_same_len(close.len(), high.len())?;
    ensure_same_len(close.len(), low.len())?;

    let ll = lowest(low, params.n);
    let hh = highest(high, params.n);
    let rsv = scale(&div(&sub(close, &ll)?, &sub(&hh, &ll)?)?, 100.0);

    let k = ema(&rsv, (2 * params.m1).saturating_sub(1));
    let d = ema(&k, (2 * params.m2).saturating_sub(1));
    let j = sub(&scale(&k, 3.0), &scale(&d, 2.0))?;
    Ok(KdjOutput { k, d, j })
}
