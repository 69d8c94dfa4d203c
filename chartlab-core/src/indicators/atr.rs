//! ATR — average true range, simple-MA variant.
//!
//! TR = max(high - low, |prev_close - high|, |prev_close - low|)
//! ATR = MA(TR, n)
//!
//! Day one has no previous close, so TR[0] is NaN and the first defined ATR
//! lands at index n (not n-1).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{shift, sma};

/// Period for [`atr`]. Conventional default: 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtrParams {
    pub n: usize,
}

impl Default for AtrParams {
    fn default() -> Self {
        Self { n: 20 }
    }
}

/// True range series, strict NaN: any undefined input leg makes that index
/// NaN. This must *not* be built from `maximum` — its NaN-replacement rule
/// would resurrect day one as a plain high-low range.
pub(crate) fn true_range(close: &[f64], high: &[f64], low: &[f64]) -> Vec<f64> {
    let prev_close = shift(close, 1);
    high.iter()
        .zip(low.iter().zip(&prev_close))
        .map(|(&h, (&l, &pc))| {
            if h.is_nan() || l.is_nan() || pc.is_nan() {
                f64::NAN
            } else {
                (h - l).max((pc - h).abs()).max((pc - l).abs())
            }
        })
        .collect()
}

/// Single ATR line, aligned to the input sequences.
pub fn atr(close: &[f64], high: &[f64], low: &[f64], params: AtrParams) -> Result<Vec<f64>> {
    ensure_same_len(close.len(), high.len())?;
    ensure_same_len(close.len(), low.len())?;
    Ok(sma(&true_range(close, high, low), params.n))
}
