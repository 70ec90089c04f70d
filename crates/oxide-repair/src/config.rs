//! Engine configuration.

/// Attempt budget used when none is configured.
pub const DEFAULT_PATIENCE: usize = 5;

/// Settings for a [`RepairEngine`](crate::engine::RepairEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairConfig {
    /// Maximum number of execute-classify-fix cycles per statement.
    pub patience: usize,
    /// Log every statement that needed at least one repair attempt.
    pub verbose: bool,
}

impl RepairConfig {
    /// Sets the attempt budget.
    #[must_use]
    pub const fn patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Enables logging of repaired statements.
    #[must_use]
    pub const fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            patience: DEFAULT_PATIENCE,
            verbose: false,
        }
    }
}
