//! Batch accounting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome counters for a run over many statements.
///
/// A report is owned by the caller and threaded through every
/// [`RepairEngine::try_fix`](crate::engine::RepairEngine::try_fix) call of a
/// run; it only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairReport {
    /// Statements that failed at first but executed after repair.
    pub fixed_and_passed: usize,
    /// Statements still failing when the attempt budget ran out.
    pub fixed_but_failed: usize,
    /// Raw messages of errors no fixer recognizes, in order of occurrence.
    pub failure_reasons: Vec<String>,
}

impl RepairReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a statement that passed after repair.
    pub fn record_passed(&mut self) {
        self.fixed_and_passed += 1;
    }

    /// Records a statement that exhausted its budget.
    pub fn record_failed(&mut self) {
        self.fixed_but_failed += 1;
    }

    /// Records an unclassified error message.
    pub fn record_unclassified(&mut self, message: impl Into<String>) {
        self.failure_reasons.push(message.into());
    }
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fix and pass number: {}", self.fixed_and_passed)?;
        write!(f, "Fix but fail number: {}", self.fixed_but_failed)
    }
}
