//! DPO — detrended price oscillator.
//!
//! DPO = close - REF(MA(close, m1), m2)
//! MADPO = MA(DPO, m3)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{shift, sma, sub};

/// Periods for [`dpo`]. Conventional defaults: 20/10/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpoParams {
    pub m1: usize,
    pub m2: usize,
    pub m3: usize,
}

impl Default for DpoParams {
    fn default() -> Self {
        Self {
            m1: 20,
            m2: 10,
            m3: 6,
        }
    }
}

/// Output of [`dpo`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct DpoOutput {
    pub dpo: Vec<f64>,
    pub madpo: Vec<f64>,
}

pub fn dpo(close: &[f64], params: DpoParams) -> Result<DpoOutput> {
    let dpo = sub(close, &shift(&sma(close, params.m1), params.m2))?;
    let madpo = sma(&dpo, params.m3);
    Ok(DpoOutput { dpo, madpo })
}
