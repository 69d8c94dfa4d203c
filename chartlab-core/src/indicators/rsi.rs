//! RSI — relative strength index, recursive (TDX) variant.
//!
//! up    = MAX(DIFF(close, 1), 0)
//! total = up - MIN(DIFF(close, 1), 0)        (|diff| with the day-one gap
//!                                              zero-filled by the MAX/MIN
//!                                              NaN-replacement rule)
//! RSI   = RMA(up, n) / RMA(total, n) * 100

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{diff, div, maximum, minimum, rma, scale, sub};

/// Period for [`rsi`]. Conventional default: 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsiParams {
    pub n: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { n: 24 }
    }
}

/// Single RSI line, aligned to the input close sequence.
pub fn rsi(close: &[f64], params: RsiParams) -> Result<Vec<f64>> {
    let zeros = vec![0.0; close.len()];
    let d = diff(close, 1);
    let up = maximum(&d, &zeros)?;
    let total = sub(&up, &minimum(&d, &zeros)?)?;
    Ok(scale(
        &div(&rma(&up, params.n, 1), &rma(&total, params.n, 1))?,
        100.0,
    ))
}
