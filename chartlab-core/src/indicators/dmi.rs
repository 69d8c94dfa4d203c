//! DMI — directional movement index.
//!
//! TR  = SUM(true_range, m1)
//! HD  = high - REF(high, 1);  LD = REF(low, 1) - low
//! DMP = SUM(IF(HD > 0 and HD > LD, HD, 0), m1)
//! DMM = SUM(IF(LD > 0 and LD > HD, LD, 0), m1)
//! PDI = DMP * 100 / TR;  MDI = DMM * 100 / TR
//! ADX = MA(|PDI - MDI| / (PDI + MDI) * 100, m2)
//! ADXR = (ADX + REF(ADX, m2)) / 2
//!
//! Day one's HD/LD are undefined; the comparisons come out false, so the
//! directional sums see a zero there while TR keeps its NaN — PDI/MDI start
//! one bar later than the sums.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::atr::true_range;
use crate::series::ops::ensure_same_len;
use crate::series::{abs, add, div, if_else, scale, shift, sma, sub, sum};

/// Periods for [`dmi`]. Conventional defaults: 14/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmiParams {
    pub m1: usize,
    pub m2: usize,
}

impl Default for DmiParams {
    fn default() -> Self {
        Self { m1: 14, m2: 6 }
    }
}

/// Output of [`dmi`], aligned to the input sequences.
#[derive(Debug, Clone)]
pub struct DmiOutput {
    pub pdi: Vec<f64>,
    pub mdi: Vec<f64>,
    pub adx: Vec<f64>,
    pub adxr: Vec<f64>,
}

pub fn dmi(close: &[f64], high: &[f64], low: &[f64], params: DmiParams) -> Result<DmiOutput> {
    ensure_same_len(close.len(), high.len())?;
    ensure_same_len(close.len(), low.len())?;
    let zeros = vec![0.0; close.len()];

    let tr = sum(&true_range(close, high, low), params.m1);
    let hd = sub(high, &shift(high, 1))?;
    let ld = sub(&shift(low, 1), low)?;
    let up_move: Vec<bool> = hd
        .iter()
        .zip(&ld)
        .map(|(&hd, &ld)| hd > 0.0 && hd > ld)
        .collect();
    let down_move: Vec<bool> = ld
        .iter()
        .zip(&hd)
        .map(|(&ld, &hd)| ld > 0.0 && ld > hd)
        .collect();
    let dmp = sum(&if_else(&up_move, &hd, &zeros)?, params.m1);
    let dmm = sum(&if_else(&down_move, &ld, &zeros)?, params.m1);

    let pdi = div(&scale(&dmp, 100.0), &tr)?;
    let mdi = div(&scale(&dmm, 100.0), &tr)?;

    let adx_raw = scale(&div(&abs(&sub(&pdi, &mdi)?), &add(&pdi, &mdi)?)?, 100.0);
    let adx = sma(&adx_raw, params.m2);
    let adxr: Vec<f64> = add(&adx, &shift(&adx, params.m2))?
        .iter()
        .map(|v| v / 2.0)
        .collect();

    Ok(DmiOutput {
        pdi,
        mdi,
        adx,
        adxr,
    })
}
