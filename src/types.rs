//! Core types for the agenda task list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Description given to tasks added without one.
pub const UNNAMED_TASK: &str = "Unnamed task";

/// A persisted task: what to do and the date it is due by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by storage on insert, strictly increasing, never reused.
    pub id: i64,
    pub description: String,
    /// Due date, calendar precision only.
    pub deadline: NaiveDate,
}

/// One day of the week view: a date and the tasks due on it.
/// Days without tasks carry an empty list rather than being skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}
