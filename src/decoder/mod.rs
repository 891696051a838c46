//! Sensible token output decoder
//!
//! Recognises Sensible token locking scripts by inspecting a fixed-size
//! suffix and extracts the token metadata into a `TxoData` record.
//!
//! Dispatch order:
//! - Scripts shorter than `MIN_SCRIPT_LEN` are never token outputs
//! - A `sensible`/`oraclesv` flag suffix selects FT (type 1) or Unique (type 2)
//! - Otherwise the NFT issue and transfer markers are probed, issue first
//!
//! Only `hash160` over the script prefix is linear in the script length;
//! everything else reads a bounded number of suffix bytes.

use crate::types::{SensibleLayout, TxoData};
use tracing::{debug, trace};

use self::suffix::ScriptSuffix;

pub mod encoder;
pub mod error;
pub mod ft;
pub mod nft;
pub mod suffix;
pub mod unique;

pub use error::{DecoderError, DecoderResult};

/// Scripts below this length are rejected without inspection
pub const MIN_SCRIPT_LEN: usize = 1024;

pub const OP_RETURN: u8 = 0x6a;
pub const OP_PUSHDATA1: u8 = 0x4c;

pub const SENSIBLE_FLAG: &[u8; 8] = b"sensible";
pub const ORACLESV_FLAG: &[u8; 8] = b"oraclesv";

/// type:4 LE + flag:8
pub const PROTO_HEADER_LEN: usize = 4 + 8;

pub const PROTO_TYPE_FT: u8 = 1;
pub const PROTO_TYPE_UNIQUE: u8 = 2;

/// Check for either Sensible flag suffix
pub fn has_sensible_flag(suffix: &ScriptSuffix<'_>) -> bool {
    suffix.ends_with(SENSIBLE_FLAG) || suffix.ends_with(ORACLESV_FLAG)
}

/// Decode `script` into `txo`, reporting whether it is a Sensible token output
///
/// Fields a decoder does not write keep their previous values. A rejected
/// script leaves `txo` untouched.
pub fn decode_sensible_txo(script: &[u8], txo: &mut TxoData) -> bool {
    match decode_into(script, txo) {
        Ok(_) => true,
        Err(e) => {
            trace!("Not a sensible output ({} bytes): {}", script.len(), e);
            false
        }
    }
}

/// Decode `script` into a fresh record
pub fn decode_script(script: &[u8]) -> DecoderResult<TxoData> {
    let mut txo = TxoData::default();
    decode_into(script, &mut txo)?;
    Ok(txo)
}

/// Decode `script` into `txo`, returning the matched layout or why none matched
pub fn decode_into(script: &[u8], txo: &mut TxoData) -> DecoderResult<SensibleLayout> {
    if script.len() < MIN_SCRIPT_LEN {
        return Err(DecoderError::ScriptTooShort {
            len: script.len(),
            min: MIN_SCRIPT_LEN,
        });
    }

    let suffix = ScriptSuffix::new(script);

    let layout = if has_sensible_flag(&suffix) {
        // Low byte of the little-endian type field
        let proto_type = suffix
            .byte_back(PROTO_HEADER_LEN)
            .ok_or(DecoderError::UnrecognisedLayout)?;
        match proto_type {
            PROTO_TYPE_FT => ft::decode(script, txo)?,
            PROTO_TYPE_UNIQUE => unique::decode(script, txo)?,
            other => return Err(DecoderError::UnknownProtoType(other)),
        }
    } else {
        // Issue is tested before transfer: a final byte of 1 with issue markers decodes as issue
        match suffix.byte_back(1) {
            Some(0 | 1) if nft::has_issue_markers(&suffix) => nft::decode_issue(script, txo)?,
            Some(1) if nft::has_transfer_markers(&suffix) => nft::decode_transfer(script, txo)?,
            _ => return Err(DecoderError::UnrecognisedLayout),
        }
    };

    debug!(
        "Decoded sensible output: {:?} ({} bytes)",
        layout,
        script.len()
    );
    Ok(layout)
}
