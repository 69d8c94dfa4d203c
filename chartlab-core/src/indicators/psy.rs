//! PSY — psychological line.
//!
//! PSY = COUNT(close > REF(close, 1), n) / n * 100
//! PSYMA = MA(PSY, m)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{count, shift, sma};

/// Periods for [`psy`]. Conventional defaults: 12/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsyParams {
    pub n: usize,
    pub m: usize,
}

impl Default for PsyParams {
    fn default() -> Self {
        Self { n: 12, m: 6 }
    }
}

/// Output of [`psy`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct PsyOutput {
    pub psy: Vec<f64>,
    pub psyma: Vec<f64>,
}

pub fn psy(close: &[f64], params: PsyParams) -> Result<PsyOutput> {
    let prev = shift(close, 1);
    // Day one compares against NaN, which is false — no phantom up-day.
    let up_day: Vec<bool> = close.iter().zip(&prev).map(|(&c, &p)| c > p).collect();
    let nf = params.n as f64;
    let psy: Vec<f64> = count(&up_day, params.n)
        .iter()
        .map(|&v| v / nf * 100.0)
        .collect();
    let psyma = sma(&psy, params.m);
    Ok(PsyOutput { psy, psyma })
}
