//! Sensible script builders
//!
//! Inverse of the decoders: each builder produces the protocol-data suffix of
//! one layout and appends it to a caller-supplied contract prefix. Used for
//! fixtures and the `encode` CLI command.

use super::ft::{NAME_LEN, SYMBOL_LEN};
use super::nft::{GENESIS_ID_LEN as NFT_GENESIS_ID_LEN, ISSUE_DATA_LEN, TRANSFER_DATA_LEN};
use super::{
    MIN_SCRIPT_LEN, OP_PUSHDATA1, OP_RETURN, ORACLESV_FLAG, PROTO_TYPE_FT, PROTO_TYPE_UNIQUE,
    SENSIBLE_FLAG,
};
use crate::types::FtVersion;
use crate::utils::varint::write_varint;
use byteorder::{LittleEndian, WriteBytesExt};

/// Opcode written after OP_RETURN in Unique scripts; the decoder does not read it
pub const UNIQUE_PUSH_OPCODE: u8 = 0x4e;

/// Result type for encoder operations
pub type EncoderResult<T> = Result<T, EncoderError>;

/// Encoder-specific error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncoderError {
    #[error("{field} is {actual} bytes, maximum {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} must be {expected} bytes, got {actual}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Trailing 8-byte flag of FT and Unique scripts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProtoFlag {
    #[default]
    Sensible,
    Oraclesv,
}

impl ProtoFlag {
    pub fn bytes(self) -> &'static [u8; 8] {
        match self {
            ProtoFlag::Sensible => SENSIBLE_FLAG,
            ProtoFlag::Oraclesv => ORACLESV_FLAG,
        }
    }
}

/// Zero-filled contract prefix that brings a suffix up to `MIN_SCRIPT_LEN`
pub fn padding_prefix(data_len: usize) -> Vec<u8> {
    vec![0u8; MIN_SCRIPT_LEN.saturating_sub(data_len)]
}

fn check_exact(field: &'static str, bytes: &[u8], expected: usize) -> EncoderResult<()> {
    if bytes.len() != expected {
        return Err(EncoderError::WrongLength {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn nul_padded(field: &'static str, text: &str, width: usize) -> EncoderResult<Vec<u8>> {
    let bytes = text.as_bytes();
    if bytes.len() > width {
        return Err(EncoderError::FieldTooLong {
            field,
            max: width,
            actual: bytes.len(),
        });
    }
    let mut out = bytes.to_vec();
    out.resize(width, 0);
    Ok(out)
}

fn proto_header(out: &mut Vec<u8>, proto_type: u8, flag: ProtoFlag) {
    let _ = out.write_u32::<LittleEndian>(u32::from(proto_type));
    out.extend_from_slice(flag.bytes());
}

/// Fungible token output
#[derive(Debug, Clone)]
pub struct FtScript {
    pub version: FtVersion,
    pub name: String,
    pub symbol: String,
    pub is_genesis: bool,
    pub decimal: u8,
    pub address_pkh: [u8; 20],
    pub amount: u64,
    /// Raw genesis region, `version.genesis_len()` bytes
    pub genesis: Vec<u8>,
    pub flag: ProtoFlag,
}

impl FtScript {
    /// `OP_RETURN OP_PUSHDATA1 <len> <data>`
    ///
    /// v1 data is left-padded with zeros; v2 data keeps only the trailing
    /// bytes of the field block that fit its 86-byte push.
    pub fn data_suffix(&self) -> EncoderResult<Vec<u8>> {
        check_exact("genesis", &self.genesis, self.version.genesis_len())?;

        let mut tail = nul_padded("name", &self.name, NAME_LEN)?;
        tail.extend(nul_padded("symbol", &self.symbol, SYMBOL_LEN)?);
        tail.push(u8::from(self.is_genesis));
        tail.push(self.decimal);
        tail.extend_from_slice(&self.address_pkh);
        let _ = tail.write_u64::<LittleEndian>(self.amount);
        tail.extend_from_slice(&self.genesis);
        proto_header(&mut tail, PROTO_TYPE_FT, self.flag);

        let push_len = usize::from(self.version.pushdata_len());
        let mut out = Vec::with_capacity(self.version.data_len());
        out.extend_from_slice(&[OP_RETURN, OP_PUSHDATA1, self.version.pushdata_len()]);
        if push_len >= tail.len() {
            out.resize(out.len() + push_len - tail.len(), 0);
            out.extend_from_slice(&tail);
        } else {
            out.extend_from_slice(&tail[tail.len() - push_len..]);
        }
        Ok(out)
    }

    pub fn build(&self, prefix: &[u8]) -> EncoderResult<Vec<u8>> {
        let suffix = self.data_suffix()?;
        Ok([prefix, suffix.as_slice()].concat())
    }

    pub fn build_padded(&self) -> EncoderResult<Vec<u8>> {
        self.build(&padding_prefix(self.version.data_len()))
    }
}

/// Unique output attached to an FT genesis
#[derive(Debug, Clone)]
pub struct UniqueScript {
    pub custom_data: Vec<u8>,
    pub reserved: u8,
    pub genesis_id: [u8; 36],
    pub flag: ProtoFlag,
}

impl UniqueScript {
    pub fn data_suffix(&self) -> EncoderResult<Vec<u8>> {
        let size = u32::try_from(self.custom_data.len()).map_err(|_| {
            EncoderError::FieldTooLong {
                field: "custom_data",
                max: u32::MAX as usize,
                actual: self.custom_data.len(),
            }
        })?;

        let mut out = vec![OP_RETURN, UNIQUE_PUSH_OPCODE];
        write_varint(&mut out, size);
        out.extend_from_slice(&self.custom_data);
        let _ = out.write_u32::<LittleEndian>(size);
        out.push(self.reserved);
        out.extend_from_slice(&self.genesis_id);
        proto_header(&mut out, PROTO_TYPE_UNIQUE, self.flag);
        Ok(out)
    }

    pub fn build(&self, prefix: &[u8]) -> EncoderResult<Vec<u8>> {
        let suffix = self.data_suffix()?;
        Ok([prefix, suffix.as_slice()].concat())
    }

    pub fn build_padded(&self) -> EncoderResult<Vec<u8>> {
        let suffix = self.data_suffix()?;
        Ok([padding_prefix(suffix.len()), suffix].concat())
    }
}

/// NFT issue output
#[derive(Debug, Clone)]
pub struct NftIssueScript {
    pub genesis_id: [u8; 40],
    pub address_pkh: [u8; 20],
    pub token_idx: u64,
    /// Trailing field the decoder skips
    pub unused: [u8; 8],
}

impl NftIssueScript {
    pub fn data_suffix(&self) -> Vec<u8> {
        let mut out = vec![OP_RETURN, NFT_GENESIS_ID_LEN as u8];
        out.extend_from_slice(&self.genesis_id);
        out.push(ISSUE_DATA_LEN as u8);
        out.extend_from_slice(&self.address_pkh);
        let _ = out.write_u64::<LittleEndian>(self.token_idx);
        out.extend_from_slice(&self.unused);
        out.push(0);
        out
    }

    pub fn build(&self, prefix: &[u8]) -> Vec<u8> {
        [prefix, self.data_suffix().as_slice()].concat()
    }

    pub fn build_padded(&self) -> Vec<u8> {
        let suffix = self.data_suffix();
        [padding_prefix(suffix.len()), suffix].concat()
    }
}

/// NFT transfer output
#[derive(Debug, Clone)]
pub struct NftTransferScript {
    pub genesis_id: [u8; 40],
    pub address_pkh: [u8; 20],
    pub token_idx: u64,
    pub meta_tx_id: [u8; 32],
}

impl NftTransferScript {
    pub fn data_suffix(&self) -> Vec<u8> {
        let mut out = vec![OP_RETURN, NFT_GENESIS_ID_LEN as u8];
        out.extend_from_slice(&self.genesis_id);
        out.push(TRANSFER_DATA_LEN as u8);
        out.extend_from_slice(&self.address_pkh);
        let _ = out.write_u64::<LittleEndian>(self.token_idx);
        out.extend_from_slice(&self.meta_tx_id);
        out.push(1);
        out
    }

    pub fn build(&self, prefix: &[u8]) -> Vec<u8> {
        [prefix, self.data_suffix().as_slice()].concat()
    }

    pub fn build_padded(&self) -> Vec<u8> {
        let suffix = self.data_suffix();
        [padding_prefix(suffix.len()), suffix].concat()
    }
}
