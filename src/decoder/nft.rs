//! Sensible NFT issue and transfer decoders
//!
//! ```text
//! issue:    OP_RETURN 0x28 genesis:40 0x25 address:20 token_idx:8 LE unused:8 flag:1
//! transfer: OP_RETURN 0x28 genesis:40 0x3d address:20 token_idx:8 LE meta_tx_id:32 flag:1
//! ```
//!
//! Both decoders commit once the marker bytes match; they only fail on a
//! read that runs past the script.

use super::error::DecoderResult;
use super::suffix::ScriptSuffix;
use super::OP_RETURN;
use crate::crypto::hash160;
use crate::types::{CodeType, SensibleLayout, TxoData};

pub const GENESIS_ID_LEN: usize = 40;
pub const ADDRESS_LEN: usize = 20;
pub const TOKEN_IDX_LEN: usize = 8;
pub const META_TX_ID_LEN: usize = 32;

/// Push length of the issue data following the genesis push
pub const ISSUE_DATA_LEN: usize = 37;

/// Push length of the transfer data following the genesis push
pub const TRANSFER_DATA_LEN: usize = 61;

/// OP_RETURN + push(40) + genesis + push(37) + data
pub const ISSUE_SUFFIX_LEN: usize = 1 + 1 + GENESIS_ID_LEN + 1 + ISSUE_DATA_LEN;

/// OP_RETURN + push(40) + genesis + push(61) + data
pub const TRANSFER_SUFFIX_LEN: usize = 1 + 1 + GENESIS_ID_LEN + 1 + TRANSFER_DATA_LEN;

/// Push markers shared by both layouts, keyed on the trailing data length
fn has_markers(suffix: &ScriptSuffix<'_>, data_len: usize) -> bool {
    suffix.byte_back(data_len + 1) == Some(data_len as u8)
        && suffix.byte_back(data_len + 1 + GENESIS_ID_LEN + 1) == Some(GENESIS_ID_LEN as u8)
        && suffix.byte_back(data_len + 1 + GENESIS_ID_LEN + 2) == Some(OP_RETURN)
}

pub fn has_issue_markers(suffix: &ScriptSuffix<'_>) -> bool {
    has_markers(suffix, ISSUE_DATA_LEN)
}

pub fn has_transfer_markers(suffix: &ScriptSuffix<'_>) -> bool {
    has_markers(suffix, TRANSFER_DATA_LEN)
}

/// Decode an NFT issue output; `meta_tx_id` is left as it was
pub fn decode_issue(script: &[u8], txo: &mut TxoData) -> DecoderResult<SensibleLayout> {
    let suffix = ScriptSuffix::new(script);

    let genesis_offset = suffix.require_offset_back(ISSUE_DATA_LEN + 1 + GENESIS_ID_LEN)?;
    let token_idx_offset = suffix.require_offset_back(1 + TOKEN_IDX_LEN)?;
    let address_offset = suffix.require_offset_back(ISSUE_DATA_LEN)?;

    let code_hash = hash160(suffix.prefix(ISSUE_SUFFIX_LEN)?);
    let genesis_id = suffix.slice(genesis_offset, GENESIS_ID_LEN)?.to_vec();
    let token_idx = suffix.u64_le(token_idx_offset)?;
    let address_pkh = suffix.array::<ADDRESS_LEN>(address_offset)?;

    txo.code_type = CodeType::Nft;
    txo.code_hash = code_hash;
    txo.genesis_id = genesis_id;
    txo.token_idx = token_idx;
    txo.address_pkh = address_pkh;
    txo.layout = Some(SensibleLayout::NftIssue);
    Ok(SensibleLayout::NftIssue)
}

/// Decode an NFT transfer output
pub fn decode_transfer(script: &[u8], txo: &mut TxoData) -> DecoderResult<SensibleLayout> {
    let suffix = ScriptSuffix::new(script);

    let genesis_offset = suffix.require_offset_back(TRANSFER_DATA_LEN + 1 + GENESIS_ID_LEN)?;
    let meta_tx_id_offset = suffix.require_offset_back(1 + META_TX_ID_LEN)?;
    let token_idx_offset = suffix.require_offset_back(1 + META_TX_ID_LEN + TOKEN_IDX_LEN)?;
    let address_offset = suffix.require_offset_back(TRANSFER_DATA_LEN)?;

    let code_hash = hash160(suffix.prefix(TRANSFER_SUFFIX_LEN)?);
    let genesis_id = suffix.slice(genesis_offset, GENESIS_ID_LEN)?.to_vec();
    let meta_tx_id = suffix.array::<META_TX_ID_LEN>(meta_tx_id_offset)?;
    let token_idx = suffix.u64_le(token_idx_offset)?;
    let address_pkh = suffix.array::<ADDRESS_LEN>(address_offset)?;

    txo.code_type = CodeType::Nft;
    txo.code_hash = code_hash;
    txo.genesis_id = genesis_id;
    txo.meta_tx_id = meta_tx_id;
    txo.token_idx = token_idx;
    txo.address_pkh = address_pkh;
    txo.layout = Some(SensibleLayout::NftTransfer);
    Ok(SensibleLayout::NftTransfer)
}
