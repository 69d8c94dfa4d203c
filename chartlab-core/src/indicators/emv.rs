//! EMV — ease of movement.
//!
//! VOLUME = MA(vol, n) / vol
//! MID    = 100 * (high + low - REF(high + low, 1)) / (high + low)
//! EMV    = MA(MID * VOLUME * (high - low) / MA(high - low, n), n)
//! MAEMV  = MA(EMV, m)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{add, div, mul, scale, shift, sma, sub};

/// Periods for [`emv`]. Conventional defaults: 14/9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmvParams {
    pub n: usize,
    pub m: usize,
}

impl Default for EmvParams {
    fn default() -> Self {
        Self { n: 14, m: 9 }
    }
}

/// Output of [`emv`], aligned to the input sequences.
#[derive(Debug, Clone)]
pub struct EmvOutput {
    pub emv: Vec<f64>,
    pub maemv: Vec<f64>,
}

pub fn emv(high: &[f64], low: &[f64], volume: &[f64], params: EmvParams) -> Result<EmvOutput> {
    ensure_same_len(high.len(), low.len())?;
    ensure_same_len(high.len(), volume.len())?;

    let vol_ratio = div(&sma(volume, params.n), volume)?;
    let hl = add(high, low)?;
    let mid = div(&scale(&sub(&hl, &shift(&hl, 1))?, 100.0), &hl)?;
    let range = sub(high, low)?;
    let raw = div(
        &mul(&mul(&mid, &vol_ratio)?, &range)?,
        &sma(&range, params.n),
    )?;
    let emv = sma(&raw, params.n);
    let maemv = sma(&emv, params.m);
    Ok(EmvOutput { emv, maemv })
}
