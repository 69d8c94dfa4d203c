//! CCI — commodity channel index.
//!
//! TP = (close + high + low) / 3
//! CCI = (TP - MA(TP, n)) / (0.015 * AVEDEV(TP, n))

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::ops::ensure_same_len;
use crate::series::{avedev, div, scale, sma, sub};

/// Period for [`cci`]. Conventional default: 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CciParams {
    pub n: usize,
}

impl Default for CciParams {
    fn default() -> Self {
        Self { n: 14 }
    }
}

/// Single CCI line, aligned to the input sequences.
pub fn cci(close: &[f64], high: &[f64], low: &[f64], params: CciParams) -> Result<Vec<f64>> {
    ensure_same_len(close.len(), high.len())?;
    ensure_same_len(close.len(), low.len())?;
    let tp: Vec<f64> = close
        .iter()
        .zip(high.iter().zip(low))
        .map(|(&c, (&h, &l))| (c + h + l) / 3.0)
        .collect();
    div(
        &sub(&tp, &sma(&tp, params.n))?,
        &scale(&avedev(&tp, params.n), 0.015),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::assert_approx;

    #[test]
    fn cci_known_values() {
        // Symmetric bars make TP equal the close; window [10,11]:
        // mean 10.5, avedev 0.5 -> (11-10.5)/(0.015*0.5) = 200/3.
        let close = [10.0, 11.0, 12.0];
        let high = [11.0, 12.0, 13.0];
        let low = [9.0, 10.0, 11.0];
        let out = cci(&close, &high, &low, CciParams { n: 2 }).unwrap();
        assert!(out[0].is_nan());
        assert_approx(out[1], 200.0 / 3.0, 1e-9);
        assert_approx(out[2], 200.0 / 3.0, 1e-9);
    }

    #[test]
    fn cci_flat_price_is_undefined() {
        // Zero mean deviation hits the undefined-ratio rule.
        let flat = vec![10.0; 6];
        let out = cci(&flat, &flat, &flat, CciParams { n: 3 }).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn cci_warmup_and_length() {
        let close: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.6).sin() * 3.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let out = cci(&close, &high, &low, CciParams::default()).unwrap();
        assert_eq!(out.len(), 30);
        for v in out.iter().take(13) {
            assert!(v.is_nan());
        }
        assert!(!out[13].is_nan());
    }

    #[test]
    fn cci_length_mismatch_is_error() {
        assert!(cci(&[1.0], &[1.0], &[1.0, 2.0], CciParams::default()).is_err());
    }
}
