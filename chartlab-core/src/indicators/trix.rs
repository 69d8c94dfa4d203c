//! TRIX — triple-smoothed EMA rate of change.
//!
//! TR = EMA(EMA(EMA(close, m1), m1), m1)
//! TRIX = (TR - REF(TR, 1)) / REF(TR, 1) * 100
//! TRMA = MA(TRIX, m2)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{div, ema, scale, shift, sma, sub};

/// Periods for [`trix`]. Conventional defaults: 12/20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrixParams {
    pub m1: usize,
    pub m2: usize,
}

impl Default for TrixParams {
    fn default() -> Self {
        Self { m1: 12, m2: 20 }
    }
}

/// Output of [`trix`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct TrixOutput {
    pub trix: Vec<f64>,
    pub trma: Vec<f64>,
}

pub fn trix(close: &[f64], params: TrixParams) -> Result<TrixOutput> {
    let tr = ema(&ema(&ema(close, params.m1), params.m1), params.m1);
    let prev = shift(&tr, 1);
    let trix = scale(&div(&sub(&tr, &prev)?, &prev)?, 100.0);
    let trma = sma(&trix, params.m2);
    Ok(TrixOutput { trix, trma })
}
