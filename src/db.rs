//! SQLite-backed storage engine for tasks.
//!
//! One table, created on first open and never migrated. Deadlines are stored
//! as ISO-8601 text so date comparisons work directly in SQL.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Task;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL DEFAULT 'Unnamed task',
    deadline    TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_tasks_deadline ON tasks (deadline);
"#;

/// Database handle wrapping a SQLite connection.
///
/// Single-process, single-writer: the connection is owned directly and held
/// for the life of the process.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given path.
    ///
    /// Fails with [`Error::StorageUnavailable`] when the file cannot be
    /// opened, created, or is not a task database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| Error::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        conn.execute_batch(SCHEMA)
            .map_err(|source| Error::StorageUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "opened task storage");
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert a task and return its assigned id.
    ///
    /// AUTOINCREMENT keeps ids strictly increasing; an id freed by a delete
    /// is never handed out again.
    pub fn insert(&self, description: &str, deadline: NaiveDate) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO tasks (description, deadline) VALUES (?1, ?2)",
            params![description, deadline],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Tasks due exactly on `date`, in insertion order.
    pub fn tasks_on(&self, date: NaiveDate) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, deadline FROM tasks WHERE deadline = ?1 ORDER BY id",
        )?;
        let tasks = stmt
            .query_map(params![date], parse_task_row)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(tasks)
    }

    /// Tasks due strictly before `date`, earliest deadline first.
    pub fn tasks_before(&self, date: NaiveDate) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, deadline FROM tasks WHERE deadline < ?1
             ORDER BY deadline, id",
        )?;
        let tasks = stmt
            .query_map(params![date], parse_task_row)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(tasks)
    }

    /// Every task, earliest deadline first; same-day tasks keep insertion order.
    pub fn all_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, description, deadline FROM tasks ORDER BY deadline, id")?;
        let tasks = stmt
            .query_map([], parse_task_row)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(tasks)
    }

    /// Delete the task with the given id.
    pub fn delete(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        description: row.get("description")?,
        deadline: row.get("deadline")?,
    })
}
