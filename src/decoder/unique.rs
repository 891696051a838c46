//! Sensible Unique decoder
//!
//! Unique outputs sit alongside an FT genesis and carry no owner address:
//!
//! ```text
//! OP_RETURN op varint(custom_data_size) custom_data[custom_data_size]
//! custom_data_size:4 LE reserved:1 genesis:36 type:4 LE flag:8
//! ```

use super::error::{DecoderError, DecoderResult};
use super::suffix::ScriptSuffix;
use super::{OP_RETURN, PROTO_HEADER_LEN};
use crate::crypto::hash160;
use crate::types::{CodeType, SensibleLayout, TxoData};
use crate::utils::varint::varint_len;
use tracing::trace;

pub const GENESIS_ID_LEN: usize = 36;

/// custom_data_size:4 + reserved:1 + type:4 + flag:8
pub const FIXED_REGION_LEN: usize = 17;

/// Decode a Unique output into `txo`, leaving it untouched on failure
pub fn decode(script: &[u8], txo: &mut TxoData) -> DecoderResult<SensibleLayout> {
    let suffix = ScriptSuffix::new(script);
    let script_len = suffix.len();

    let genesis_offset = suffix.require_offset_back(PROTO_HEADER_LEN + GENESIS_ID_LEN)?;
    let reserved_offset = suffix.require_offset_back(PROTO_HEADER_LEN + GENESIS_ID_LEN + 1)?;
    let custom_data_size_offset =
        suffix.require_offset_back(PROTO_HEADER_LEN + GENESIS_ID_LEN + 1 + 4)?;

    let custom_data_size = suffix.u32_le(custom_data_size_offset)?;
    let reserved = suffix.u8_at(reserved_offset)?;

    // OP_RETURN + op + varint + custom data + fixed region + genesis
    let data_len = (2 + varint_len(custom_data_size) + FIXED_REGION_LEN + GENESIS_ID_LEN)
        .checked_add(custom_data_size as usize)
        .ok_or(DecoderError::UniqueLengthOverflow {
            data_len: usize::MAX,
            script_len,
        })?;
    trace!(
        "Unique framing: custom_data_size={} data_len={} script_len={}",
        custom_data_size,
        data_len,
        script_len
    );

    if data_len >= script_len {
        return Err(DecoderError::UniqueLengthOverflow {
            data_len,
            script_len,
        });
    }
    let op_return_offset = script_len - data_len;
    if suffix.u8_at(op_return_offset)? != OP_RETURN {
        return Err(DecoderError::MissingOpReturn {
            offset: op_return_offset,
        });
    }

    let code_hash = hash160(suffix.prefix(data_len)?);
    let genesis_id = suffix.slice(genesis_offset, GENESIS_ID_LEN)?.to_vec();

    txo.code_type = CodeType::Unique;
    txo.address_pkh = [0u8; 20];
    txo.code_hash = code_hash;
    txo.genesis_id = genesis_id;

    let layout = SensibleLayout::Unique {
        custom_data_size,
        reserved,
    };
    txo.layout = Some(layout);
    Ok(layout)
}
