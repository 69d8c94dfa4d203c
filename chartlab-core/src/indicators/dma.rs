//! DMA — difference of two moving averages.
//!
//! DIF = MA(close, n1) - MA(close, n2)
//! DIFMA = MA(DIF, m)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{sma, sub};

/// Periods for [`dma`]. Conventional defaults: 10/50/10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmaParams {
    pub n1: usize,
    pub n2: usize,
    pub m: usize,
}

impl Default for DmaParams {
    fn default() -> Self {
        Self {
            n1: 10,
            n2: 50,
            m: 10,
        }
    }
}

/// Output of [`dma`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct DmaOutput {
    pub dif: Vec<f64>,
    pub difma: Vec<f64>,
}

pub fn dma(close: &[f64], params: DmaParams) -> Result<DmaOutput> {
    let dif = sub(&sma(close, params.n1), &sma(close, params.n2))?;
    let difma = sma(&dif, params.m);
    Ok(DmaOutput { dif, difma })
}
