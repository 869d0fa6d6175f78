//! Size and deduplication statistics for a bundling run.
//!
//! Counters are accumulated across every language and namespace of a run;
//! no per-namespace breakdown is kept.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationStats {
    /// Compact JSON bytes of every loaded namespace
    original_size: usize,

    /// Compact JSON bytes of every optimized namespace
    optimized_size: usize,

    duplicates_removed: usize,
}

impl OptimizationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one namespace before and after optimization.
    pub fn record_namespace(&mut self, original: &Map<String, Value>, optimized: &Map<String, Value>) {
        self.original_size += compact_len(original);
        self.optimized_size += compact_len(optimized);
    }

    pub fn record_duplicates(&mut self, count: usize) {
        self.duplicates_removed += count;
    }

    pub fn original_size(&self) -> usize {
        self.original_size
    }

    pub fn optimized_size(&self) -> usize {
        self.optimized_size
    }

    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    /// Percentage of bytes saved, rounded to one decimal place.
    ///
    /// An empty run divides zero by zero and yields `NaN`.
    pub fn compression_ratio(&self) -> f64 {
        let original = self.original_size as f64;
        let optimized = self.optimized_size as f64;
        let ratio = (original - optimized) / original * 100.0;
        (ratio * 10.0).round() / 10.0
    }

    pub fn report(&self) -> StatsReport {
        StatsReport {
            original_size: self.original_size,
            optimized_size: self.optimized_size,
            duplicates_removed: self.duplicates_removed,
            compression_ratio: self.compression_ratio(),
        }
    }
}

/// Snapshot of the run statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub original_size: usize,
    pub optimized_size: usize,
    pub duplicates_removed: usize,
    pub compression_ratio: f64,
}

impl StatsReport {
    /// Print the human-readable summary at the end of a run.
    pub fn log_summary(&self) {
        info!("Translation optimization summary:");
        info!("  Original size:      {:.2} KB", kilobytes(self.original_size));
        info!("  Optimized size:     {:.2} KB", kilobytes(self.optimized_size));
        info!("  Duplicates removed: {}", self.duplicates_removed);
        info!("  Compression ratio:  {}%", self.compression_ratio);
    }
}

fn kilobytes(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

fn compact_len(map: &Map<String, Value>) -> usize {
    serde_json::to_vec(map).map_or(0, |bytes| bytes.len())
}
