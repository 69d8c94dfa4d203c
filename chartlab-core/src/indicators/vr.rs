//! VR — volume ratio of up-days to down-days.
//!
//! LC = REF(close, 1)
//! VR = SUM(IF(close > LC, volume, 0), m1)
//!    / SUM(IF(close <= LC, volume, 0), m1) * 100
//!
//! Day one's comparison against the undefined previous close is false on
//! both sides, so that bar's volume counts for neither camp.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{div, if_else, scale, shift, sum};

/// Period for [`vr`]. Conventional default: 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrParams {
    pub m1: usize,
}

impl Default for VrParams {
    fn default() -> Self {
        Self { m1: 26 }
    }
}

/// Single VR line, aligned to the input sequences.
pub fn vr(close: &[f64], volume: &[f64], params: VrParams) -> Result<Vec<f64>> {
    ensure_same_len(close.len(), volume.len())?;
    let zeros = vec![0.0; close.len()];
    let lc = shift(close, 1);
    let up: Vec<bool> = close.iter().zip(&lc).map(|(&c, &p)| c > p).collect();
    let down: Vec<bool> = close.iter().zip(&lc).map(|(&c, &p)| c <= p).collect();
    let up_vol = sum(&if_else(&up, volume, &zeros)?, params.m1);
    let down_vol = sum(&if_else(&down, volume, &zeros)?, params.m1);
    Ok(scale(&div(&up_vol, &down_vol)?, 100.0))
}
