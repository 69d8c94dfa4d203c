//! ChartLab Core — sequence primitives and composite technical indicators.
//!
//! This crate contains the indicator computation engine:
//! - Domain types (OHLCV bars, field-sequence extraction)
//! - Primitive sequence transforms (windowed averages, extrema, deviation,
//!   regression, shift/difference, crossover and run-counting logic)
//! - Twenty composite indicators assembled strictly from the primitives
//!
//! All outputs are aligned to their inputs: a transform over a sequence of
//! length n returns length n, with NaN (or false) standing in for "not enough
//! history yet" exactly as charting platforms render it. Mismatched input
//! lengths are the only hard error.

pub mod domain;
pub mod error;
pub mod indicators;
pub mod series;

pub use error::{Result, SeriesError};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: public engine types are Send + Sync.
    ///
    /// Inputs are never mutated and outputs are freshly allocated, so callers
    /// may fan indicator calls out across worker threads with no coordination.
    /// If any type fails this check, the build breaks immediately.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<SeriesError>();
        require_sync::<SeriesError>();

        require_send::<indicators::MacdParams>();
        require_sync::<indicators::MacdParams>();
        require_send::<indicators::MacdOutput>();
        require_sync::<indicators::MacdOutput>();
        require_send::<indicators::KdjParams>();
        require_sync::<indicators::KdjParams>();
        require_send::<indicators::KdjOutput>();
        require_sync::<indicators::KdjOutput>();
        require_send::<indicators::BollParams>();
        require_sync::<indicators::BollParams>();
        require_send::<indicators::BollOutput>();
        require_sync::<indicators::BollOutput>();
        require_send::<indicators::DmiOutput>();
        require_sync::<indicators::DmiOutput>();
    }
}
