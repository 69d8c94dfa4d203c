//! ROC — rate of change.
//!
//! ROC = 100 * (close - REF(close, n)) / REF(close, n)
//! MAROC = MA(ROC, m)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{div, scale, shift, sma, sub};

/// Periods for [`roc`]. Conventional defaults: 12/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocParams {
    pub n: usize,
    pub m: usize,
}

impl Default for RocParams {
    fn default() -> Self {
        Self { n: 12, m: 6 }
    }
}

/// Output of [`roc`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct RocOutput {
    pub roc: Vec<f64>,
    pub maroc: Vec<f64>,
}

pub fn roc(close: &[f64], params: RocParams) -> Result<RocOutput> {
    let prev = shift(close, params.n);
    let roc = div(&scale(&sub(close, &prev)?, 100.0), &prev)?;
    let maroc = sma(&roc, params.m);
    Ok(RocOutput { roc, maroc })
}
