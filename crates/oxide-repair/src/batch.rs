//! Positional batch processing.
//!
//! A batch pairs the i-th candidate statement with the i-th schema
//! instance. Statements are repaired one after another and share a single
//! [`RepairReport`].

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use oxide_repair_core::{SchemaInstance, TableResolver};
use tracing::info;

use crate::engine::RepairEngine;
use crate::error::{RepairError, Result};
use crate::oracle::QueryOracle;
use crate::report::RepairReport;

/// Reads one candidate statement per line.
///
/// # Errors
///
/// [`RepairError::Io`] if the file cannot be read.
pub fn load_predictions(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Reads a JSON array of schema instances.
///
/// # Errors
///
/// [`RepairError::Io`] if the file cannot be opened and
/// [`RepairError::Serialization`] if it is not a valid instance array.
pub fn load_instances(path: &Path) -> Result<Vec<SchemaInstance>> {
    let file = fs::File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Writes one statement per line.
///
/// # Errors
///
/// [`RepairError::Io`] if the file cannot be written.
pub fn write_output(path: &Path, statements: &[String]) -> Result<()> {
    let mut content = statements.join("\n");
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Returns `<stem>_fixed.txt` next to the prediction file.
#[must_use]
pub fn default_output_path(pred_file: &Path) -> PathBuf {
    let stem = pred_file
        .file_stem()
        .map_or_else(|| "predictions".into(), |s| s.to_string_lossy());
    pred_file.with_file_name(format!("{stem}_fixed.txt"))
}

/// A repair engine bound to an ordered list of schema instances.
pub struct BatchRepair<O, R> {
    engine: RepairEngine<O, R>,
    instances: Vec<SchemaInstance>,
}

impl<O: QueryOracle, R: TableResolver> BatchRepair<O, R> {
    /// Creates a batch over `instances`.
    pub const fn new(engine: RepairEngine<O, R>, instances: Vec<SchemaInstance>) -> Self {
        Self { engine, instances }
    }

    /// Repairs the prediction at position `idx` of the batch.
    ///
    /// Without an instance for `idx` the statement is returned untouched.
    pub async fn repair_at(&self, idx: usize, sql: &str, report: &mut RepairReport) -> String {
        match self.instances.get(idx) {
            Some(instance) => self.engine.try_fix(sql, instance, report).await,
            None => sql.to_string(),
        }
    }

    /// Repairs every prediction against the instance at the same position.
    ///
    /// # Errors
    ///
    /// [`RepairError::LengthMismatch`] if the counts differ; no statement is
    /// executed in that case.
    pub async fn run(&self, predictions: &[String]) -> Result<(Vec<String>, RepairReport)> {
        if predictions.len() != self.instances.len() {
            return Err(RepairError::LengthMismatch {
                predictions: predictions.len(),
                instances: self.instances.len(),
            });
        }

        let mut report = RepairReport::new();
        let mut repaired = Vec::with_capacity(predictions.len());
        for (sql, instance) in predictions.iter().zip(&self.instances) {
            repaired.push(self.engine.try_fix(sql.trim(), instance, &mut report).await);
        }

        info!(
            statements = repaired.len(),
            fixed_and_passed = report.fixed_and_passed,
            fixed_but_failed = report.fixed_but_failed,
            unclassified = report.failure_reasons.len(),
            "Batch repaired"
        );
        Ok((repaired, report))
    }
}
