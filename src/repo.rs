//! Query/command layer over the storage engine.
//!
//! Owns the date policy: "today" is the wall-clock date re-read on every
//! call, never cached, so a session that runs past midnight stays correct.

use chrono::{Datelike, Duration, Local, NaiveDate};
use tracing::debug;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::types::{DaySchedule, Task, UNNAMED_TASK};

pub struct TaskRepository {
    db: Database,
}

impl TaskRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Add a task and return its assigned id.
    ///
    /// An empty or whitespace description becomes the "Unnamed task"
    /// placeholder; an empty deadline means today, evaluated now rather than
    /// at startup.
    pub fn add(&self, description: &str, deadline_text: &str) -> Result<i64> {
        let description = match description.trim() {
            "" => UNNAMED_TASK,
            trimmed => trimmed,
        };
        let deadline = parse_deadline(deadline_text)?;
        let id = self.db.insert(description, deadline)?;
        debug!(id, %deadline, "added task");
        Ok(id)
    }

    /// Today's bucket: the queried date and the tasks due on it, in
    /// insertion order. The date rides along so callers label the view with
    /// the day the query actually used.
    pub fn view_today(&self) -> Result<DaySchedule> {
        let date = today();
        Ok(DaySchedule {
            date,
            tasks: self.db.tasks_on(date)?,
        })
    }

    /// The seven days starting today, one bucket per day. Days with nothing
    /// due are present with an empty task list.
    pub fn view_week(&self) -> Result<Vec<DaySchedule>> {
        let today = today();
        (0..7)
            .map(|offset| {
                let date = today + Duration::days(offset);
                Ok(DaySchedule {
                    date,
                    tasks: self.db.tasks_on(date)?,
                })
            })
            .collect()
    }

    /// Every task, earliest deadline first; ties keep insertion order.
    pub fn view_all(&self) -> Result<Vec<Task>> {
        self.db.all_tasks()
    }

    /// Tasks whose deadline has already passed, earliest first.
    pub fn view_missed(&self) -> Result<Vec<Task>> {
        self.db.tasks_before(today())
    }

    /// Delete the task at `position` (1-based) in the view_all ordering and
    /// return it.
    pub fn delete_at(&self, position: usize) -> Result<Task> {
        let tasks = self.db.all_tasks()?;
        let len = tasks.len();
        if len == 0 {
            return Err(Error::EmptyList);
        }
        if position == 0 || position > len {
            return Err(Error::OutOfRange { position, len });
        }
        let task = tasks[position - 1].clone();
        self.db.delete(task.id)?;
        debug!(id = task.id, "deleted task");
        Ok(task)
    }
}

/// Parse user deadline text: empty means today, otherwise strict YYYY-MM-DD.
pub fn parse_deadline(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(today());
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(text.to_string()))?;
    // %Y also matches signed years ("+12024", "-0500"); only four-digit
    // years keep the stored text in lexicographic date order.
    if !(0..=9999).contains(&date.year()) {
        return Err(Error::InvalidDate(text.to_string()));
    }
    Ok(date)
}

/// Wall-clock date, re-read per call.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
