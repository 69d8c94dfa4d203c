//! BIAS — deviation of close from its moving averages.
//!
//! BIASx = (close - MA(close, x)) / MA(close, x) * 100

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{div, scale, sma, sub};

/// Periods for [`bias`]. Conventional defaults: 6/12/24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasParams {
    pub l1: usize,
    pub l2: usize,
    pub l3: usize,
}

impl Default for BiasParams {
    fn default() -> Self {
        Self {
            l1: 6,
            l2: 12,
            l3: 24,
        }
    }
}

/// Output of [`bias`]: one line per lookback, aligned to the input.
#[derive(Debug, Clone)]
pub struct BiasOutput {
    pub bias1: Vec<f64>,
    pub bias2: Vec<f64>,
    pub bias3: Vec<f64>,
}

pub fn bias(close: &[f64], params: BiasParams) -> Result<BiasOutput> {
    Ok(BiasOutput {
        bias1: bias_line(close, params.l1)?,
        bias2: bias_line(close, params.l2)?,
        bias3: bias_line(close, params.l3)?,
    })
}

fn bias_line(close: &[f64], n: usize) -> Result<Vec<f64>> {
    let ma = sma(close, n);
    Ok(scale(&div(&sub(close, &ma)?, &ma)?, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{assert_seq, DEFAULT_EPSILON};

    const NAN: f64 = f64::NAN;

    #[test]
    fn bias_known_values() {
        let close = [10.0, 11.0, 12.0];
        let out = bias(&close, BiasParams { l1: 1, l2: 2, l3: 3 }).unwrap();
        // l1=1: MA is the close itself, deviation zero.
        assert_seq(&out.bias1, &[0.0, 0.0, 0.0], DEFAULT_EPSILON);
        // l2=2: (11-10.5)/10.5*100 = 100/21; (12-11.5)/11.5*100 = 100/23.
        assert_seq(
            &out.bias2,
            &[NAN, 100.0 / 21.0, 100.0 / 23.0],
            DEFAULT_EPSILON,
        );
        // l3=3: (12-11)/11*100 = 100/11.
        assert_seq(&out.bias3, &[NAN, NAN, 100.0 / 11.0], DEFAULT_EPSILON);
    }

    #[test]
    fn bias_zero_mean_is_undefined() {
        // A mean of exactly zero hits the undefined-ratio rule, not infinity.
        let close = [1.0, -1.0, 1.0, -1.0];
        let out = bias(&close, BiasParams { l1: 2, l2: 2, l3: 2 }).unwrap();
        assert!(out.bias1[1].is_nan());
        assert!(out.bias1[3].is_nan());
    }

    #[test]
    fn bias_output_lengths() {
        let close = vec![10.0; 30];
        let out = bias(&close, BiasParams::default()).unwrap();
        assert_eq!(out.bias1.len(), 30);
        assert_eq!(out.bias2.len(), 30);
        assert_eq!(out.bias3.len(), 30);
    }
}
