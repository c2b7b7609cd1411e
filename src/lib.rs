//! Agenda Library
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod db;
pub mod error;
pub mod format;
pub mod menu;
pub mod repo;
pub mod types;
