use crate::decoder::decode_script;
use crate::errors::{AppError, AppResult};
use crate::types::statistics::StatisticsCollector;
use crate::types::{DecodedOutput, ScanStats, UtxoRecord};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Scan configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub csv_path: PathBuf,
    pub progress_interval: usize,
}

/// CSV processor that decodes every Sensible output in a UTXO dump
pub struct CsvProcessor {
    config: ScanConfig,
}

impl CsvProcessor {
    pub fn new(config: ScanConfig) -> Self {
        info!("CSV Processor initialised");
        info!("Source CSV: {}", config.csv_path.display());
        info!("Progress interval: {}", config.progress_interval);
        Self { config }
    }

    /// Process the configured CSV file, writing one JSON line per decoded output
    pub fn process_csv<W: Write>(&self, writer: W) -> AppResult<ScanStats> {
        let file = File::open(&self.config.csv_path).map_err(AppError::Io)?;
        self.process_reader(BufReader::new(file), writer)
    }

    /// Process CSV text from any reader
    pub fn process_reader<R: Read, W: Write>(&self, reader: R, writer: W) -> AppResult<ScanStats> {
        info!("Starting CSV scan");

        let mut csv_reader = ReaderBuilder::new()
            .comment(Some(b'#')) // Skip lines starting with #
            .has_headers(true) // First non-comment line is the header
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut writer = BufWriter::new(writer);
        let mut stats = ScanStats::new();
        let progress_interval = self.config.progress_interval.max(1);

        for (row, result) in csv_reader.deserialize::<UtxoRecord>().enumerate() {
            let record = result.map_err(|e| AppError::InvalidRecord {
                line: e
                    .position()
                    .map(|pos| pos.line() as usize)
                    .unwrap_or(row + 2),
                reason: e.to_string(),
            })?;
            stats.total_records += 1;

            if record.may_be_sensible() {
                self.process_record(&record, &mut writer, &mut stats)?;
            }

            if stats.total_records % progress_interval == 0 {
                info!(
                    "Progress: {} records | Sensible: {} | Malformed: {}",
                    stats.total_records,
                    stats.sensible_found(),
                    stats.malformed_records
                );
            }
        }

        writer.flush()?;
        stats.finish();

        info!("CSV scan completed");
        info!("Total records: {}", stats.total_records);
        info!("Sensible outputs found: {}", stats.sensible_found());
        info!("Malformed records: {}", stats.malformed_records);
        info!("Elapsed: {:.2?}", stats.duration());

        Ok(stats)
    }

    fn process_record<W: Write>(
        &self,
        record: &UtxoRecord,
        writer: &mut W,
        stats: &mut ScanStats,
    ) -> AppResult<()> {
        let script = match record.script_bytes() {
            Ok(script) => script,
            Err(e) => {
                warn!("Invalid script hex for {}: {}", record.output_key(), e);
                stats.malformed_records += 1;
                return Ok(());
            }
        };

        match decode_script(&script) {
            Ok(txo) => {
                debug!("{}: {}", record.output_key(), txo.summary());
                stats.record(txo.code_type, txo.layout);
                let output = DecodedOutput {
                    txid: record.txid.clone(),
                    vout: record.vout,
                    height: record.height,
                    txo,
                };
                serde_json::to_writer(&mut *writer, &output)?;
                writeln!(writer)?;
            }
            Err(e) => debug!("{}: {}", record.output_key(), e),
        }
        Ok(())
    }
}
