//! MACD — moving average convergence/divergence.
//!
//! DIF = EMA(close, short) - EMA(close, long)
//! DEA = EMA(DIF, m)
//! MACD = (DIF - DEA) * 2

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{ema, scale, sub};

/// Periods for [`macd`]. Conventional defaults: 12/26/9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub short: usize,
    pub long: usize,
    pub m: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            short: 12,
            long: 26,
            m: 9,
        }
    }
}

/// Output of [`macd`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub dif: Vec<f64>,
    pub dea: Vec<f64>,
    pub macd: Vec<f64>,
}

pub fn macd(close: &[f64], params: MacdParams) -> Result<MacdOutput> {
    let dif = sub(&ema(close, params.short), &ema(close, params.long))?;
    let dea = ema(&dif, params.m);
    let macd = scale(&sub(&dif, &dea)?, 2.0);
    Ok(MacdOutput { dif, dea, macd })
}
