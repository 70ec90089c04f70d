//! Databases used as executability oracles.
//!
//! A statement is valid if the database executes it without error. Result
//! rows are fetched and discarded.

use std::future::Future;
use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, warn};

use crate::error::Result;

/// The database's answer to one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The statement executed.
    Accepted,
    /// The statement failed with this raw error message.
    Rejected(String),
}

/// Opens one session per statement under repair.
pub trait QueryOracle {
    /// Connection kept open across the attempts for one statement.
    type Session: OracleSession;

    /// Opens a session on the database identified by `db_id`.
    fn open(&self, db_id: &str) -> impl Future<Output = Result<Self::Session>>;
}

/// A live connection that judges statements.
pub trait OracleSession {
    /// Executes `sql` and reports whether it ran.
    fn submit(&mut self, sql: &str) -> impl Future<Output = Verdict>;

    /// Releases the connection.
    fn close(self) -> impl Future<Output = ()>;
}

/// Oracle over a directory of SQLite files laid out as
/// `<db_dir>/<db_id>/<db_id>.sqlite`.
#[derive(Debug, Clone)]
pub struct SqliteOracle {
    db_dir: PathBuf,
}

impl SqliteOracle {
    /// Creates an oracle rooted at `db_dir`.
    pub fn new(db_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_dir: db_dir.into(),
        }
    }

    /// Returns the path of the database file for `db_id`.
    #[must_use]
    pub fn database_path(&self, db_id: &str) -> PathBuf {
        self.db_dir.join(db_id).join(format!("{db_id}.sqlite"))
    }
}

impl QueryOracle for SqliteOracle {
    type Session = SqliteSession;

    async fn open(&self, db_id: &str) -> Result<SqliteSession> {
        let path = self.database_path(db_id);
        debug!(db_id = %db_id, path = %path.display(), "Opening database");
        let conn = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .connect()
            .await?;
        Ok(SqliteSession { conn })
    }
}

/// A read-only SQLite connection.
pub struct SqliteSession {
    conn: SqliteConnection,
}

impl OracleSession for SqliteSession {
    async fn submit(&mut self, sql: &str) -> Verdict {
        match sqlx::query(sql).fetch_all(&mut self.conn).await {
            Ok(_) => Verdict::Accepted,
            Err(sqlx::Error::Database(e)) => Verdict::Rejected(e.message().to_string()),
            Err(e) => Verdict::Rejected(e.to_string()),
        }
    }

    async fn close(self) {
        if let Err(e) = self.conn.close().await {
            warn!(error = %e, "Failed to close database connection");
        }
    }
}
