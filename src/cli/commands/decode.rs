use crate::config::{AppConfig, OutputFormat};
use crate::decoder::{decode_into, DecoderError};
use crate::errors::{AppError, AppResult};
use crate::types::TxoData;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Decode a single hex-encoded locking script
#[derive(Args)]
pub struct DecodeCommand {
    /// Hex-encoded locking script
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub script: Option<String>,

    /// Read the hex-encoded locking script from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format (overrides config.toml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let format = self.format.unwrap_or(config.output.format);

        let script_hex = match (&self.script, &self.file) {
            (Some(hex), _) => hex.clone(),
            (None, Some(path)) => {
                info!("Reading script from {}", path.display());
                std::fs::read_to_string(path)?
            }
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "either a script or --file is required".to_string(),
                ))
            }
        };

        let script = parse_script_hex(&script_hex)?;
        info!("Decoding {}-byte script", script.len());

        let mut txo = TxoData::default();
        let output = match decode_into(&script, &mut txo) {
            Ok(_) => render_decoded(&txo, format)?,
            Err(e) => render_rejected(&e, format),
        };
        println!("{}", output);
        Ok(())
    }
}

/// Decode script hex, ignoring surrounding whitespace and an optional 0x prefix
pub fn parse_script_hex(text: &str) -> AppResult<Vec<u8>> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    Ok(hex::decode(trimmed)?)
}

/// Render a decoded record in the requested format
pub fn render_decoded(txo: &TxoData, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(txo)?),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("TYPE:{}", txo.code_type.description()),
                format!(
                    "LAYOUT:{}",
                    txo.layout.map_or("none", |layout| layout.label())
                ),
                format!("CODE_HASH:{}", hex::encode(txo.code_hash)),
                format!("GENESIS_ID:{}", hex::encode(&txo.genesis_id)),
            ];
            if txo.is_ft() {
                lines.push(format!("SENSIBLE_ID:{}", hex::encode(&txo.sensible_id)));
                lines.push(format!("NAME:{}", txo.name));
                lines.push(format!("NAME_HEX:{}", hex::encode(&txo.name_bytes)));
                lines.push(format!("SYMBOL:{}", txo.symbol));
                lines.push(format!("SYMBOL_HEX:{}", hex::encode(&txo.symbol_bytes)));
                lines.push(format!("DECIMAL:{}", txo.decimal));
                lines.push(format!("AMOUNT:{}", txo.amount));
            }
            if txo.is_nft() {
                lines.push(format!("TOKEN_IDX:{}", txo.token_idx));
                lines.push(format!("META_TX_ID:{}", hex::encode(txo.meta_tx_id)));
            }
            lines.push(format!("ADDRESS_PKH:{}", hex::encode(txo.address_pkh)));
            Ok(lines.join("\n"))
        }
    }
}

/// Render a rejection reason in the requested format
pub fn render_rejected(error: &DecoderError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({
            "type": "NONE",
            "reason": error.tag(),
            "detail": error.to_string(),
        })
        .to_string(),
        OutputFormat::Text => format!("TYPE:NONE REASON:{}", error.tag()),
    }
}
