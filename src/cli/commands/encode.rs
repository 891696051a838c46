use crate::cli::commands::decode::parse_script_hex;
use crate::decoder::encoder::{
    padding_prefix, EncoderError, FtScript, NftIssueScript, NftTransferScript, ProtoFlag,
    UniqueScript,
};
use crate::errors::{AppError, AppResult};
use crate::types::FtVersion;
use clap::{Args, Subcommand};

/// Build a synthetic Sensible locking script and print it as hex
#[derive(Args)]
pub struct EncodeCommand {
    #[command(subcommand)]
    pub layout: EncodeLayout,

    /// Hex contract prefix placed before the protocol data (default: zero padding to 1024 bytes)
    #[arg(long, global = true)]
    pub prefix: Option<String>,
}

#[derive(Subcommand)]
pub enum EncodeLayout {
    /// Fungible token output
    Ft(FtArgs),
    /// Unique output
    Unique(UniqueArgs),
    /// NFT issue output
    NftIssue(NftIssueArgs),
    /// NFT transfer output
    NftTransfer(NftTransferArgs),
}

#[derive(Args)]
pub struct FtArgs {
    #[arg(long = "ft-version", value_enum, default_value = "v5")]
    pub ft_version: FtVersion,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub symbol: String,
    #[arg(long, default_value_t = 0)]
    pub decimal: u8,
    #[arg(long, default_value_t = 0)]
    pub amount: u64,
    /// 20-byte owner public key hash (hex)
    #[arg(long)]
    pub address: String,
    /// Genesis region (hex), 20/36/76 bytes depending on version
    #[arg(long)]
    pub genesis: String,
    /// Mark the output as the genesis output
    #[arg(long)]
    pub is_genesis: bool,
    /// Use the legacy "oraclesv" flag
    #[arg(long)]
    pub oraclesv: bool,
}

#[derive(Args)]
pub struct UniqueArgs {
    /// 36-byte genesis id (hex)
    #[arg(long)]
    pub genesis: String,
    /// Custom data (hex)
    #[arg(long, default_value = "")]
    pub custom_data: String,
    #[arg(long, default_value_t = 0)]
    pub reserved: u8,
    #[arg(long)]
    pub oraclesv: bool,
}

#[derive(Args)]
pub struct NftIssueArgs {
    /// 40-byte genesis id (hex)
    #[arg(long)]
    pub genesis: String,
    /// 20-byte owner public key hash (hex)
    #[arg(long)]
    pub address: String,
    #[arg(long, default_value_t = 0)]
    pub token_idx: u64,
}

#[derive(Args)]
pub struct NftTransferArgs {
    /// 40-byte genesis id (hex)
    #[arg(long)]
    pub genesis: String,
    /// 20-byte owner public key hash (hex)
    #[arg(long)]
    pub address: String,
    #[arg(long, default_value_t = 0)]
    pub token_idx: u64,
    /// 32-byte metadata transaction id (hex)
    #[arg(long)]
    pub meta_tx_id: String,
}

fn proto_flag(oraclesv: bool) -> ProtoFlag {
    if oraclesv {
        ProtoFlag::Oraclesv
    } else {
        ProtoFlag::Sensible
    }
}

/// Decode a hex field that must be exactly `N` bytes
pub fn parse_hex_array<const N: usize>(field: &'static str, text: &str) -> AppResult<[u8; N]> {
    let bytes = parse_script_hex(text)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        AppError::InvalidInput(
            EncoderError::WrongLength {
                field,
                expected: N,
                actual: bytes.len(),
            }
            .to_string(),
        )
    })
}

fn encoder_error(e: EncoderError) -> AppError {
    AppError::InvalidInput(e.to_string())
}

impl EncodeLayout {
    /// Protocol-data suffix for the selected layout
    pub fn data_suffix(&self) -> AppResult<Vec<u8>> {
        match self {
            EncodeLayout::Ft(args) => FtScript {
                version: args.ft_version,
                name: args.name.clone(),
                symbol: args.symbol.clone(),
                is_genesis: args.is_genesis,
                decimal: args.decimal,
                address_pkh: parse_hex_array("address", &args.address)?,
                amount: args.amount,
                genesis: parse_script_hex(&args.genesis)?,
                flag: proto_flag(args.oraclesv),
            }
            .data_suffix()
            .map_err(encoder_error),
            EncodeLayout::Unique(args) => UniqueScript {
                custom_data: parse_script_hex(&args.custom_data)?,
                reserved: args.reserved,
                genesis_id: parse_hex_array("genesis", &args.genesis)?,
                flag: proto_flag(args.oraclesv),
            }
            .data_suffix()
            .map_err(encoder_error),
            EncodeLayout::NftIssue(args) => Ok(NftIssueScript {
                genesis_id: parse_hex_array("genesis", &args.genesis)?,
                address_pkh: parse_hex_array("address", &args.address)?,
                token_idx: args.token_idx,
                unused: [0u8; 8],
            }
            .data_suffix()),
            EncodeLayout::NftTransfer(args) => Ok(NftTransferScript {
                genesis_id: parse_hex_array("genesis", &args.genesis)?,
                address_pkh: parse_hex_array("address", &args.address)?,
                token_idx: args.token_idx,
                meta_tx_id: parse_hex_array("meta_tx_id", &args.meta_tx_id)?,
            }
            .data_suffix()),
        }
    }
}

impl EncodeCommand {
    pub fn run(&self) -> AppResult<()> {
        println!("{}", hex::encode(self.build()?));
        Ok(())
    }

    /// Full locking script: prefix followed by the protocol data
    pub fn build(&self) -> AppResult<Vec<u8>> {
        let suffix = self.layout.data_suffix()?;
        let prefix = match &self.prefix {
            Some(prefix) => parse_script_hex(prefix)?,
            None => padding_prefix(suffix.len()),
        };
        Ok([prefix, suffix].concat())
    }
}
