//! Sensible Decoder - Type System
//!
//! - `common`: UTXO dump records and decoded scan output
//! - `statistics`: Scan statistics with the shared collector trait
//! - `txo`: The decoded token record and layout tags

mod common;
pub mod statistics;
pub mod txo;

pub use common::*;
pub use statistics::{ScanStats, StatisticsCollector, TimingInfo};
pub use txo::{CodeType, FtVersion, SensibleLayout, TxoData};
