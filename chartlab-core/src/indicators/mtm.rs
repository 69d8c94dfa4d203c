//! MTM — momentum.
//!
//! MTM = close - REF(close, n)
//! MTMMA = MA(MTM, m)

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{shift, sma, sub};

/// Periods for [`mtm`]. Conventional defaults: 12/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtmParams {
    pub n: usize,
    pub m: usize,
}

impl Default for MtmParams {
    fn default() -> Self {
        Self { n: 12, m: 6 }
    }
}

/// Output of [`mtm`], aligned to the input close sequence.
#[derive(Debug, Clone)]
pub struct MtmOutput {
    pub mtm: Vec<f64>,
    pub mtmma: Vec<f64>,
}

pub fn mtm(close: &[f64], params: MtmParams) -> Result<MtmOutput> {
    let mtm = sub(close, &shift(close, params.n))?;
    let mtmma = sma(&mtm, params.m);
    Ok(MtmOutput { mtm, mtmma })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{assert_seq, DEFAULT_EPSILON};

    const NAN: f64 = f64::NAN;

    #[test]
    fn mtm_known_values() {
        let close = [1.0, 3.0, 6.0, 10.0];
        let out = mtm(&close, MtmParams { n: 1, m: 2 }).unwrap();
        assert_seq(&out.mtm, &[NAN, 2.0, 3.0, 4.0], DEFAULT_EPSILON);
        assert_seq(&out.mtmma, &[NAN, NAN, 2.5, 3.5], DEFAULT_EPSILON);
    }

    #[test]
    fn mtm_flat_close_is_zero() {
        let close = vec![5.0; 20];
        let out = mtm(&close, MtmParams::default()).unwrap();
        assert_eq!(out.mtm.len(), 20);
        assert!(out.mtm[11].is_nan());
        for &v in out.mtm.iter().skip(12) {
            assert!((v - 0.0).abs() < DEFAULT_EPSILON);
        }
    }
}
