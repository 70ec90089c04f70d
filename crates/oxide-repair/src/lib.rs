//! Bounded-retry repair of generated SQL.
//!
//! `oxide-repair` takes candidate statements produced upstream (typically by
//! a language model), runs each one against the SQLite database its schema
//! instance names, and when execution fails rewrites the statement according
//! to the class of error and tries again, up to a fixed attempt budget.
//!
//! # Architecture
//!
//! - **Oracle** - Opens a database and reports whether a statement executes
//! - **Engine** - The execute, classify, fix, retry loop for one statement
//! - **Report** - Pass/fail counters and unclassified error messages
//! - **Batch** - Positional pairing of predictions with schema instances
//!
//! The rewrites themselves live in [`oxide_repair_core`].
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_repair::prelude::*;
//!
//! let engine = RepairEngine::new(SqliteOracle::new("data/database"), RepairConfig::default());
//! let mut report = RepairReport::new();
//! let fixed = engine.try_fix("SELECT YEAR(date) FROM t", &instance, &mut report).await;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! oxide-repair --pred-file pred.txt --input-file dev.json --db-dir data/database
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod report;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::batch::{
        BatchRepair, default_output_path, load_instances, load_predictions, write_output,
    };
    pub use crate::config::{DEFAULT_PATIENCE, RepairConfig};
    pub use crate::engine::RepairEngine;
    pub use crate::error::{RepairError, Result};
    pub use crate::oracle::{OracleSession, QueryOracle, SqliteOracle, Verdict};
    pub use crate::report::RepairReport;
    pub use oxide_repair_core::{ErrorKind, SchemaInstance, SqlFixer, TableDef};
}
