//! TAQ — Donchian-style channel: highest high, lowest low, midline.
//!
//! UP = HHV(high, n); DOWN = LLV(low, n); MID = (UP + DOWN) / 2

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{add, highest, lowest};

/// Period for [`taq`]. No conventional default — callers pick the channel
/// width (20 and 55 are the common choices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaqParams {
    pub n: usize,
}

/// Output of [`taq`], aligned to the input sequences.
#[derive(Debug, Clone)]
pub struct TaqOutput {
    pub up: Vec<f64>,
    pub mid: Vec<f64>,
    pub down: Vec<f64>,
}

pub fn taq(high: &[f64], low: &[f64], params: TaqParams) -> Result<TaqOutput> {
    ensure_same_len(high.len(), low.len())?;
    let up = highest(high, params.n);
    let down = lowest(low, params.n);
    let mid: Vec<f64> = add(&up, &down)?.iter().map(|v| v / 2.0).collect();
    Ok(TaqOutput { up, mid, down })
}
