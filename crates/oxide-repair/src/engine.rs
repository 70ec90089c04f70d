//! The bounded-retry repair loop.
//!
//! Each statement is executed against its database; on failure the error
//! message is classified, the matching fixer rewrites the statement and the
//! loop tries again, until the statement executes or the attempt budget is
//! spent. Fixer failures and unrecognized errors never abort the loop.

use oxide_repair_core::{ClauseScanner, ErrorKind, SchemaInstance, SqlFixer, TableResolver};
use tracing::{debug, info, warn};

use crate::config::RepairConfig;
use crate::oracle::{OracleSession, QueryOracle, Verdict};
use crate::report::RepairReport;

/// Repairs statements against a [`QueryOracle`].
pub struct RepairEngine<O, R = ClauseScanner> {
    oracle: O,
    fixer: SqlFixer<R>,
    config: RepairConfig,
}

impl<O: QueryOracle> RepairEngine<O> {
    /// Creates an engine with the default fixer.
    pub const fn new(oracle: O, config: RepairConfig) -> Self {
        Self {
            oracle,
            fixer: SqlFixer::new(),
            config,
        }
    }
}

impl<O: QueryOracle, R: TableResolver> RepairEngine<O, R> {
    /// Creates an engine with a custom fixer.
    pub const fn with_fixer(oracle: O, fixer: SqlFixer<R>, config: RepairConfig) -> Self {
        Self {
            oracle,
            fixer,
            config,
        }
    }

    /// Repairs `sql` against the database of `instance`.
    ///
    /// Executes at most `patience` times. The returned statement always ends
    /// with exactly one semicolon, whether or not it was repaired. Counters
    /// and unclassified messages are added to `report`. A zero budget never
    /// touches the database and counts the statement as fixed-but-failed.
    pub async fn try_fix(
        &self,
        sql: &str,
        instance: &SchemaInstance,
        report: &mut RepairReport,
    ) -> String {
        let patience = self.config.patience;
        let mut sql = strip_terminator(sql).to_string();
        if patience == 0 {
            report.record_failed();
            return terminate(&sql);
        }

        let mut session = match self.oracle.open(&instance.db_id).await {
            Ok(session) => session,
            Err(e) => {
                warn!(db_id = %instance.db_id, error = %e, "Cannot open database");
                report.record_unclassified(e.to_string());
                report.record_failed();
                return terminate(&sql);
            }
        };

        let mut remaining = patience;
        let mut has_bug = true;
        while has_bug && remaining > 0 {
            debug!(
                db_id = %instance.db_id,
                attempt = patience - remaining + 1,
                sql = %sql,
                "Executing statement"
            );
            match session.submit(&sql).await {
                Verdict::Accepted => {
                    has_bug = false;
                    if remaining < patience {
                        report.record_passed();
                    }
                }
                Verdict::Rejected(message) => {
                    if let Some(fixed) = self.repair_step(&message, &sql, instance, report) {
                        sql = fixed;
                    }
                    remaining -= 1;
                }
            }
        }
        session.close().await;

        if has_bug {
            report.record_failed();
        }
        let sql = terminate(&sql);
        if remaining < patience && self.config.verbose {
            info!(db_id = %instance.db_id, passed = !has_bug, sql = %sql, "Repaired statement");
        }
        sql
    }

    /// Classifies `message` and returns the rewritten statement, if any.
    fn repair_step(
        &self,
        message: &str,
        sql: &str,
        instance: &SchemaInstance,
        report: &mut RepairReport,
    ) -> Option<String> {
        let kind = ErrorKind::classify(message);
        match self.fixer.apply(&kind, sql, instance) {
            Ok(Some(fixed)) => {
                debug!(kind = kind.name(), target = kind.payload(), fixed = %fixed, "Applied fix");
                Some(fixed)
            }
            Ok(None) => {
                warn!(db_id = %instance.db_id, message = %message, "Unclassified error");
                report.record_unclassified(message);
                None
            }
            Err(e) => {
                warn!(kind = kind.name(), error = %e, sql = %sql, "Fix failed");
                None
            }
        }
    }
}

/// Removes trailing semicolons and surrounding whitespace.
fn strip_terminator(sql: &str) -> &str {
    sql.trim_start()
        .trim_end_matches(|c: char| c == ';' || c.is_whitespace())
}

/// Appends exactly one semicolon.
fn terminate(sql: &str) -> String {
    format!("{};", strip_terminator(sql))
}
