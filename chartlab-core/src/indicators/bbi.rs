//! BBI — bull and bear index: the mean of four moving averages.
//!
//! BBI = (MA(close,m1) + MA(close,m2) + MA(close,m3) + MA(close,m4)) / 4

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{add, sma};

/// Periods for [`bbi`]. Conventional defaults: 3/6/12/20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BbiParams {
    pub m1: usize,
    pub m2: usize,
    pub m3: usize,
    pub m4: usize,
}

impl Default for BbiParams {
    fn default() -> Self {
        Self {
            m1: 3,
            m2: 6,
            m3: 12,
            m4: 20,
        }
    }
}

/// Single BBI line, aligned to the input close sequence.
pub fn bbi(close: &[f64], params: BbiParams) -> Result<Vec<f64>> {
    let total = add(
        &add(
            &add(&sma(close, params.m1), &sma(close, params.m2))?,
            &sma(close, params.m3),
        )?,
        &sma(close, params.m4),
    )?;
    Ok(total.iter().map(|v| v / 4.0).collect())
}
