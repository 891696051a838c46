//! Decoded Sensible token output record
//!
//! `TxoData` is the caller-owned record the decoders populate in place.
//! Byte fields serialise as lowercase hex.

use serde::Serialize;

/// Sensible contract code family
///
/// Discriminants match the tag values used by the indexer that consumes these records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeType {
    #[default]
    None = 0,
    Ft = 1,
    Unique = 2,
    Nft = 3,
}

impl CodeType {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn description(&self) -> &'static str {
        match self {
            CodeType::None => "None",
            CodeType::Ft => "Sensible FT",
            CodeType::Unique => "Sensible Unique",
            CodeType::Nft => "Sensible NFT",
        }
    }
}

/// FT layout versions, newest first in probe order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FtVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
}

impl FtVersion {
    /// Probe order used by the FT decoder: the first match wins
    pub const PROBE_ORDER: [FtVersion; 5] = [
        FtVersion::V5,
        FtVersion::V4,
        FtVersion::V3,
        FtVersion::V2,
        FtVersion::V1,
    ];

    /// Bytes between the pushdata length byte and the genesis field, including the 12-byte trailer
    pub fn body_len(self) -> usize {
        match self {
            FtVersion::V1 => 92,
            FtVersion::V2 => 50,
            FtVersion::V3 | FtVersion::V4 | FtVersion::V5 => 72,
        }
    }

    /// Width of the genesis source region
    pub fn genesis_len(self) -> usize {
        match self {
            FtVersion::V1 | FtVersion::V3 => 20,
            FtVersion::V2 | FtVersion::V4 => 36,
            FtVersion::V5 => 76,
        }
    }

    /// Width of the raw sensible id; only v5 carries one separately
    pub fn sensible_id_len(self) -> Option<usize> {
        match self {
            FtVersion::V5 => Some(36),
            _ => None,
        }
    }

    /// Value of the OP_PUSHDATA1 length byte that identifies this version
    pub fn pushdata_len(self) -> u8 {
        (self.body_len() + self.genesis_len()) as u8
    }

    /// OP_RETURN + OP_PUSHDATA1 + length byte + pushdata
    pub fn data_len(self) -> usize {
        3 + self.body_len() + self.genesis_len()
    }
}

/// Which wire layout produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SensibleLayout {
    Ft {
        version: FtVersion,
    },
    Unique {
        custom_data_size: u32,
        /// Pushdata indicator preceding the genesis field; exposed, never validated
        reserved: u8,
    },
    NftIssue,
    NftTransfer,
}

impl SensibleLayout {
    /// Short label such as `ft/v3` or `nft_issue`
    pub fn label(&self) -> &'static str {
        match self {
            SensibleLayout::Ft { version } => match version {
                FtVersion::V1 => "ft/v1",
                FtVersion::V2 => "ft/v2",
                FtVersion::V3 => "ft/v3",
                FtVersion::V4 => "ft/v4",
                FtVersion::V5 => "ft/v5",
            },
            SensibleLayout::Unique { .. } => "unique",
            SensibleLayout::NftIssue => "nft_issue",
            SensibleLayout::NftTransfer => "nft_transfer",
        }
    }
}

/// Decoded token metadata for one transaction output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TxoData {
    pub code_type: CodeType,
    #[serde(with = "hex::serde")]
    pub code_hash: [u8; 20],
    #[serde(with = "hex::serde")]
    pub genesis_id: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub sensible_id: Vec<u8>,
    /// Display form of `name_bytes`; invalid UTF-8 is replaced
    pub name: String,
    pub symbol: String,
    /// Raw name with trailing NULs removed, at most 20 bytes
    #[serde(with = "hex::serde")]
    pub name_bytes: Vec<u8>,
    /// Raw symbol with trailing NULs removed, at most 10 bytes
    #[serde(with = "hex::serde")]
    pub symbol_bytes: Vec<u8>,
    pub decimal: u64,
    pub amount: u64,
    #[serde(with = "hex::serde")]
    pub address_pkh: [u8; 20],
    pub token_idx: u64,
    #[serde(with = "hex::serde")]
    pub meta_tx_id: [u8; 32],
    pub layout: Option<SensibleLayout>,
}

impl TxoData {
    pub fn is_ft(&self) -> bool {
        self.code_type == CodeType::Ft
    }

    pub fn is_nft(&self) -> bool {
        self.code_type == CodeType::Nft
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        match self.code_type {
            CodeType::Ft => format!(
                "{} name={} symbol={} decimal={} amount={} address={} genesis={}",
                self.code_type.description(),
                self.name,
                self.symbol,
                self.decimal,
                self.amount,
                hex::encode(self.address_pkh),
                hex::encode(&self.genesis_id)
            ),
            CodeType::Unique => format!(
                "{} genesis={}",
                self.code_type.description(),
                hex::encode(&self.genesis_id)
            ),
            CodeType::Nft => format!(
                "{} token_idx={} address={} genesis={}",
                self.code_type.description(),
                self.token_idx,
                hex::encode(self.address_pkh),
                hex::encode(&self.genesis_id)
            ),
            CodeType::None => "None".to_string(),
        }
    }
}
