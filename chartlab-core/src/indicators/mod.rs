//! Composite technical indicators.
//!
//! Twenty charting-platform-compatible indicators, one file each, assembled
//! strictly from the `series` primitives plus elementwise glue — the windowed
//! and recursive logic lives only in `series`. Each indicator is a pure
//! function of already-extracted price/volume sequences and a parameter
//! struct (conventional defaults via `Default`), returning a fixed-shape
//! output struct whose every field is aligned to the input length.
//!
//! Construction order inside each indicator follows the conventional formula
//! exactly: warm-up length and floating-point rounding both depend on which
//! intermediate is built first, so the order is part of the contract.

pub mod atr;
pub mod bbi;
pub mod bias;
pub mod boll;
pub mod brar;
pub mod cci;
pub mod dma;
pub mod dmi;
pub mod dpo;
pub mod emv;
pub mod kdj;
pub mod macd;
pub mod mtm;
pub mod psy;
pub mod roc;
pub mod rsi;
pub mod taq;
pub mod trix;
pub mod vr;
pub mod wr;

pub use atr::{atr, AtrParams};
pub use bbi::{bbi, BbiParams};
pub use bias::{bias, BiasOutput, BiasParams};
pub use boll::{boll, BollOutput, BollParams};
pub use brar::{brar, BrarOutput, BrarParams};
pub use cci::{cci, CciParams};
pub use dma::{dma, DmaOutput, DmaParams};
pub use dmi::{dmi, DmiOutput, DmiParams};
pub use dpo::{dpo, DpoOutput, DpoParams};
pub use emv::{emv, EmvOutput, EmvParams};
pub use kdj::{kdj, KdjOutput, KdjParams};
pub use macd::{macd, MacdOutput, MacdParams};
pub use mtm::{mtm, MtmOutput, MtmParams};
pub use psy::{psy, PsyOutput, PsyParams};
pub use roc::{roc, RocOutput, RocParams};
pub use rsi::{rsi, RsiParams};
pub use taq::{taq, TaqOutput, TaqParams};
pub use trix::{trix, TrixOutput, TrixParams};
pub use vr::{vr, VrParams};
pub use wr::{wr, WrOutput, WrParams};
