#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::rc::Rc;

use oxide_repair::prelude::*;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

#[derive(Default)]
struct Script {
    verdicts: VecDeque<Verdict>,
    fallback: Option<Verdict>,
    submitted: Vec<String>,
    opened: usize,
    closed: usize,
    fail_open: bool,
}

/// An oracle that replays canned verdicts and records what it was asked.
#[derive(Clone, Default)]
pub struct ScriptedOracle {
    script: Rc<RefCell<Script>>,
}

impl ScriptedOracle {
    /// Replays `verdicts` in order, then accepts everything.
    pub fn new(verdicts: impl IntoIterator<Item = Verdict>) -> Self {
        let oracle = Self::default();
        oracle.script.borrow_mut().verdicts = verdicts.into_iter().collect();
        oracle
    }

    /// Accepts every statement.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Rejects every statement with `message`.
    pub fn always_rejecting(message: &str) -> Self {
        let oracle = Self::default();
        oracle.script.borrow_mut().fallback = Some(Verdict::Rejected(message.to_string()));
        oracle
    }

    /// Fails to open any database.
    pub fn unopenable() -> Self {
        let oracle = Self::default();
        oracle.script.borrow_mut().fail_open = true;
        oracle
    }

    pub fn submitted(&self) -> Vec<String> {
        self.script.borrow().submitted.clone()
    }

    pub fn opened(&self) -> usize {
        self.script.borrow().opened
    }

    pub fn closed(&self) -> usize {
        self.script.borrow().closed
    }
}

impl QueryOracle for ScriptedOracle {
    type Session = ScriptedSession;

    async fn open(&self, _db_id: &str) -> Result<ScriptedSession> {
        let mut script = self.script.borrow_mut();
        if script.fail_open {
            return Err(RepairError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "unable to open database file",
            )));
        }
        script.opened += 1;
        Ok(ScriptedSession {
            script: Rc::clone(&self.script),
        })
    }
}

pub struct ScriptedSession {
    script: Rc<RefCell<Script>>,
}

impl OracleSession for ScriptedSession {
    async fn submit(&mut self, sql: &str) -> Verdict {
        let mut script = self.script.borrow_mut();
        script.submitted.push(sql.to_string());
        script
            .verdicts
            .pop_front()
            .or_else(|| script.fallback.clone())
            .unwrap_or(Verdict::Accepted)
    }

    async fn close(self) {
        self.script.borrow_mut().closed += 1;
    }
}

/// Creates `<dir>/<db_id>/<db_id>.sqlite` and runs `ddl` in it.
pub async fn create_database(dir: &Path, db_id: &str, ddl: &[&str]) {
    let db_dir = dir.join(db_id);
    std::fs::create_dir_all(&db_dir).expect("Failed to create database directory");
    let mut conn = SqliteConnectOptions::new()
        .filename(db_dir.join(format!("{db_id}.sqlite")))
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create SQLite database");
    for statement in ddl {
        sqlx::query(statement)
            .execute(&mut conn)
            .await
            .unwrap_or_else(|e| panic!("Failed to run: {statement}\nError: {e}"));
    }
    conn.close().await.expect("Failed to close connection");
}

/// `t(date, name)`.
pub fn dated() -> SchemaInstance {
    SchemaInstance::new("dated").table(TableDef::new("t", ["date", "name"]))
}

/// `t1(a, b)` and `t2(c)`.
pub fn two_tables() -> SchemaInstance {
    SchemaInstance::new("two")
        .table(TableDef::new("t1", ["a", "b"]))
        .table(TableDef::new("t2", ["c"]))
}

pub fn engine<O: QueryOracle>(oracle: O, patience: usize) -> RepairEngine<O> {
    RepairEngine::new(oracle, RepairConfig::default().patience(patience))
}
