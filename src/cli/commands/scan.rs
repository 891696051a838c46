use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::{CsvProcessor, ScanConfig};
use crate::types::statistics::StatisticsCollector;
use clap::Args;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Decode every Sensible output in a UTXO dump CSV
#[derive(Args)]
pub struct ScanCommand {
    /// UTXO dump CSV (overrides paths.scan_csv in config.toml)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// JSON-lines output file; stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log progress every N rows (overrides config.toml)
    #[arg(long)]
    pub progress_interval: Option<usize>,
}

impl ScanCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()?;

        let csv_path = self
            .csv
            .clone()
            .or(config.paths.scan_csv)
            .ok_or_else(|| {
                AppError::Config(
                    "UTXO CSV path not configured. Pass --csv or set SENSIBLE_PATHS__SCAN_CSV"
                        .to_string(),
                )
            })?;
        let output_path = self.output.clone().or(config.paths.scan_output);
        let progress_interval = self
            .progress_interval
            .unwrap_or(config.processing.progress_interval);

        let processor = CsvProcessor::new(ScanConfig {
            csv_path,
            progress_interval,
        });

        let writer: Box<dyn Write> = match &output_path {
            Some(path) => {
                info!("Writing decoded outputs to {}", path.display());
                Box::new(File::create(path)?)
            }
            None => Box::new(std::io::stdout().lock()),
        };

        let stats = processor.process_csv(writer)?;
        eprintln!("{}", stats.summary());
        Ok(())
    }
}
