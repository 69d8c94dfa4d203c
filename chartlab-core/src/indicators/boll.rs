//! BOLL — Bollinger bands.
//!
//! MID = MA(close, n); UPPER/LOWER = MID +/- STD(close, n) * p.
//! Population standard deviation (divide by n), like the charting platforms.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{add, scale, sma, stddev, sub};

/// Parameters for [`boll`]. Conventional defaults: 20-bar window, 2x band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollParams {
    pub n: usize,
    pub p: f64,
}

impl Default for BollParams {
    fn default() -> Self {
        Self { n: 20, p: 2.0 }
    }
}

/// Output of [`boll`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct BollOutput {
    pub upper: Vec<f64>,
    pub mid: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn boll(close: &[f64], params: BollParams) -> Result<BollOutput> {
    let mid = sma(close, params.n);
    let band = scale(&stddev(close, params.n), params.p);
    let upper = add(&mid, &band)?;
    let lower = sub(&mid, &band)?;
    Ok(BollOutput { upper, mid, lower })
}
