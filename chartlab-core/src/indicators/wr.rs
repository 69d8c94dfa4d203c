//! WR — Williams %R over two lookbacks.
//!
//! WRx = (HHV(high, x) - close) / (HHV(high, x) - LLV(low, x)) * 100

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{div, highest, lowest, scale, sub};

/// Periods for [`wr`]. Conventional defaults: 10 and 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrParams {
    pub n: usize,
    pub n1: usize,
}

impl Default for WrParams {
    fn default() -> Self {
        Self { n: 10, n1: 6 }
    }
}

/// Output of [`wr`]: the two %R lines, aligned to the inputs.
#[derive(Debug, Clone)]
pub struct WrOutput {
    pub wr: Vec<f64>,
    pub wr1: Vec<f64>,
}

pub fn wr(close: &[f64], high: &[f64], low: &[f64], params: WrParams) -> Result<WrOutput> {
    ensure_same_len(close.len(), high.len())?;
    ensure_same_len(close.len(), low.len())?;
    Ok(WrOutput {
        wr: wr_line(close, high, low, params.n)?,
        wr1: wr_line(close, high, low, params.n1)?,
    })
}

fn wr_line(close: &[f64], high: &[f64], low: &[f64], n: usize) -> Result<Vec<f64>> {
    let hh = highest(high, n);
    let ll = lowest(low, n);
    Ok(scale(&div(&sub(&hh, close)?, &sub(&hh, &ll)?)?, 100.0))
}
