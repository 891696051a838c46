//! Common types shared across the scan pipeline
//!
//! Rows come from bitcoin-utxo-dump style CSV files. Only `txid`, `vout` and
//! `script` are required; the remaining columns are carried through when present.

use crate::types::TxoData;
use serde::{Deserialize, Serialize};

/// Raw UTXO record from CSV file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtxoRecord {
    #[serde(default)]
    pub count: u64,
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub coinbase: u8, // 0 or 1
    #[serde(default)]
    pub amount: u64, // Satoshis
    pub script: String, // Hex-encoded script
    #[serde(rename = "type", default)]
    pub script_type: String,
    #[serde(default)]
    pub address: String,
}

impl UtxoRecord {
    /// Decode the hex-encoded locking script
    pub fn script_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(self.script.trim())
    }

    /// Cheap length check on the hex text before decoding it
    pub fn may_be_sensible(&self) -> bool {
        self.script.trim().len() / 2 >= crate::decoder::MIN_SCRIPT_LEN
    }

    /// Create a unique key for this output (txid:vout)
    pub fn output_key(&self) -> String {
        format!("{}:{}", self.txid, self.vout)
    }
}

/// One decoded Sensible output, written as a JSON line by the scanner
#[derive(Debug, Clone, Serialize)]
pub struct DecodedOutput {
    pub txid: String,
    pub vout: u32,
    pub height: u32,
    pub txo: TxoData,
}
