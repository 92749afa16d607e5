//! CSV export of sweep results.
//!
//! Writes one row per (placement, policy) pair so the aggregate scores
//! can be charted or post-processed outside the toolkit.

use std::path::Path;

use serde::Serialize;

use crate::{Result, experiment::SweepResult};

/// A single row in the sweep CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct SweepCsvRecord {
    pub placement: String,
    pub policy: String,
    pub runs: usize,
    pub mean_score: f64,
    pub std_dev: f64,
    pub min_score: u64,
    pub max_score: u64,
}

/// Exporter for sweep result CSV files.
pub struct SweepCsvExporter;

impl SweepCsvExporter {
    /// Flatten a sweep result into CSV records.
    pub fn records(result: &SweepResult) -> Vec<SweepCsvRecord> {
        result
            .rows
            .iter()
            .map(|row| SweepCsvRecord {
                placement: row.placement.to_string(),
                policy: row.policy.to_string(),
                runs: row.runs,
                mean_score: row.mean_score,
                std_dev: row.std_dev,
                min_score: row.min_score,
                max_score: row.max_score,
            })
            .collect()
    }

    /// Write the sweep result to a CSV file with a header row.
    pub fn write<P: AsRef<Path>>(result: &SweepResult, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in Self::records(result) {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
