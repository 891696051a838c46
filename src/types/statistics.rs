//! Statistics collection for the scan pipeline
//!
//! Keeps the collector trait and timing helper shared by any processor that
//! walks a UTXO dump.

use crate::types::{CodeType, FtVersion, SensibleLayout};
use std::time::{Duration, Instant};

/// Common trait for all statistics collectors
pub trait StatisticsCollector {
    /// Get the total processing duration
    fn duration(&self) -> Duration;

    /// Calculate the processing rate (items per second)
    fn processing_rate(&self) -> f64;

    /// Finalize statistics collection
    fn finish(&mut self);

    /// Get a summary of the statistics
    fn summary(&self) -> String;
}

/// Common timing information for all statistics
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub start_time: Instant,
    pub processing_duration: Duration,
}

impl Default for TimingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            processing_duration: Duration::default(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_duration = self.start_time.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        if self.processing_duration.is_zero() {
            self.start_time.elapsed()
        } else {
            self.processing_duration
        }
    }
}

/// Scan statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub total_records: usize,
    pub ft_found: usize,
    pub unique_found: usize,
    pub nft_found: usize,
    /// FT outputs per layout version, indexed v1..v5
    pub ft_versions: [usize; 5],
    pub malformed_records: usize,
    pub timing: TimingInfo,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one decoded output
    pub fn record(&mut self, code_type: CodeType, layout: Option<SensibleLayout>) {
        match code_type {
            CodeType::Ft => self.ft_found += 1,
            CodeType::Unique => self.unique_found += 1,
            CodeType::Nft => self.nft_found += 1,
            CodeType::None => {}
        }
        if let Some(SensibleLayout::Ft { version }) = layout {
            let idx = match version {
                FtVersion::V1 => 0,
                FtVersion::V2 => 1,
                FtVersion::V3 => 2,
                FtVersion::V4 => 3,
                FtVersion::V5 => 4,
            };
            self.ft_versions[idx] += 1;
        }
    }

    pub fn sensible_found(&self) -> usize {
        self.ft_found + self.unique_found + self.nft_found
    }

    pub fn sensible_rate(&self) -> f64 {
        if self.total_records > 0 {
            (self.sensible_found() as f64 / self.total_records as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.total_records > 0 {
            (self.malformed_records as f64 / self.total_records as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl StatisticsCollector for ScanStats {
    fn duration(&self) -> Duration {
        self.timing.elapsed()
    }

    fn processing_rate(&self) -> f64 {
        let elapsed = self.timing.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_records as f64 / elapsed
        } else {
            0.0
        }
    }

    fn finish(&mut self) {
        self.timing.finish();
    }

    fn summary(&self) -> String {
        format!(
            "Scan: {} total records, {} sensible ({:.1}%: FT {} [v1 {} v2 {} v3 {} v4 {} v5 {}], Unique {}, NFT {}), {} malformed ({:.1}%), {:.1} records/sec in {:.2?}",
            self.total_records,
            self.sensible_found(),
            self.sensible_rate(),
            self.ft_found,
            self.ft_versions[0],
            self.ft_versions[1],
            self.ft_versions[2],
            self.ft_versions[3],
            self.ft_versions[4],
            self.unique_found,
            self.nft_found,
            self.malformed_records,
            self.error_rate(),
            self.processing_rate(),
            self.duration()
        )
    }
}
