//! Error taxonomy for the agenda crate.
//!
//! Everything except [`Error::StorageUnavailable`] is recoverable at the menu
//! boundary: the session reports the error and keeps running.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The storage file could not be opened or created. Fatal at startup.
    #[error("cannot open task storage at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// User-supplied deadline text did not parse as a calendar date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Delete position outside 1..=len.
    #[error("no task at position {position}, the list has {len}")]
    OutOfRange { position: usize, len: usize },

    /// Delete requested while the task list is empty.
    #[error("the task list is empty")]
    EmptyList,

    /// Delete targeted an id that is not in storage. The repository deletes
    /// by position in a freshly fetched list, so hitting this means the
    /// store changed underneath us.
    #[error("no task with id {0}")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors the menu reports and moves past; false for errors
    /// that end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidDate(_)
                | Error::OutOfRange { .. }
                | Error::EmptyList
                | Error::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
