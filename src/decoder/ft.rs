//! Sensible FT (fungible token) decoder
//!
//! FT outputs end with `OP_RETURN OP_PUSHDATA1 <len> <data>` where data is
//!
//! ```text
//! [v1 only: 20 leading bytes]
//! name:20 symbol:10 is_genesis:1 decimal:1 address:20 amount:8 LE
//! genesis:G type:4 LE flag:8
//! ```
//!
//! The version is identified by the pushdata length byte alone:
//! v5=148 (G=76), v4=108 (G=36), v3=92 (G=20), v2=86 (G=36), v1=112 (G=20).
//! For v2 the pushdata is shorter than the field block, so `name` and the
//! head of `symbol` are read from bytes that precede the pushdata.
//!
//! In v5 the 76-byte genesis region is
//! `genesis_hash:20 rabin_pubkey_hash_array_hash:20 sensible_id:36`; the
//! exposed genesis id is its hash160 and the sensible id is its raw tail.

use super::error::{DecoderError, DecoderResult};
use super::suffix::{trim_nul_padded, ScriptSuffix};
use super::{OP_PUSHDATA1, PROTO_HEADER_LEN};
use crate::crypto::hash160;
use crate::types::{CodeType, FtVersion, SensibleLayout, TxoData};
use tracing::trace;

pub const NAME_LEN: usize = 20;
pub const SYMBOL_LEN: usize = 10;
pub const ADDRESS_LEN: usize = 20;
pub const AMOUNT_LEN: usize = 8;

/// Field block immediately preceding the genesis region
pub const FIELD_BLOCK_LEN: usize = NAME_LEN + SYMBOL_LEN + 1 + 1 + ADDRESS_LEN + AMOUNT_LEN;

/// Probe the pushdata opcode/length pair of every version, newest first
pub fn detect_version(suffix: &ScriptSuffix<'_>) -> Option<FtVersion> {
    FtVersion::PROBE_ORDER.into_iter().find(|&version| {
        let pushdata_back = version.body_len() + version.genesis_len() + 1;
        let opcode = suffix.byte_back(pushdata_back + 1);
        let length = suffix.byte_back(pushdata_back);
        trace!(
            "FT {:?} probe: opcode={:?} length={:?}",
            version,
            opcode,
            length
        );
        opcode == Some(OP_PUSHDATA1) && length == Some(version.pushdata_len())
    })
}

/// Decode an FT output into `txo`, leaving it untouched on failure
pub fn decode(script: &[u8], txo: &mut TxoData) -> DecoderResult<SensibleLayout> {
    let suffix = ScriptSuffix::new(script);
    let version = detect_version(&suffix).ok_or(DecoderError::NoFtVersion)?;

    let proto_type_offset = suffix.require_offset_back(PROTO_HEADER_LEN)?;
    let genesis_len = version.genesis_len();
    let back = |offset: usize, width: usize| {
        offset.checked_sub(width).ok_or(DecoderError::Truncated {
            offset,
            width,
            len: suffix.len(),
        })
    };
    let genesis_offset = back(proto_type_offset, genesis_len)?;
    let amount_offset = back(genesis_offset, AMOUNT_LEN)?;
    let address_offset = back(amount_offset, ADDRESS_LEN)?;
    let decimal_offset = back(address_offset, 1)?;
    // is_genesis sits between symbol and decimal
    let symbol_offset = back(decimal_offset, 1 + SYMBOL_LEN)?;
    let name_offset = back(symbol_offset, NAME_LEN)?;

    let decimal = suffix.u8_at(decimal_offset)?;
    let symbol_bytes = trim_nul_padded(suffix.slice(symbol_offset, SYMBOL_LEN)?).to_vec();
    let name_bytes = trim_nul_padded(suffix.slice(name_offset, NAME_LEN)?).to_vec();
    let amount = suffix.u64_le(amount_offset)?;
    let address_pkh = suffix.array::<ADDRESS_LEN>(address_offset)?;
    let code_hash = hash160(suffix.prefix(version.data_len())?);
    let genesis_source = suffix.slice(genesis_offset, genesis_len)?;

    let (genesis_id, sensible_id) = match version.sensible_id_len() {
        Some(sensible_id_len) => {
            let sensible_offset = proto_type_offset - sensible_id_len;
            (
                hash160(genesis_source).to_vec(),
                suffix.slice(sensible_offset, sensible_id_len)?.to_vec(),
            )
        }
        None => (genesis_source.to_vec(), genesis_source.to_vec()),
    };

    txo.code_type = CodeType::Ft;
    txo.decimal = u64::from(decimal);
    txo.symbol = String::from_utf8_lossy(&symbol_bytes).into_owned();
    txo.symbol_bytes = symbol_bytes;
    txo.name = String::from_utf8_lossy(&name_bytes).into_owned();
    txo.name_bytes = name_bytes;
    txo.amount = amount;
    txo.address_pkh = address_pkh;
    txo.code_hash = code_hash;
    txo.genesis_id = genesis_id;
    txo.sensible_id = sensible_id;

    let layout = SensibleLayout::Ft { version };
    txo.layout = Some(layout);
    Ok(layout)
}
