//! Task record.
//!
//! This module defines the `Task` struct, one row on the board with all
//! the metadata the capture form collects.

use serde::{Deserialize, Serialize};

use crate::fields::{Priority, Status};

/// A unit of field work as tracked by the board.
///
/// `due_date` holds the operator's raw `YYYY-MM-DD` input. It is kept as
/// typed and parsed on demand (see `store::parse_due_date`), so a record
/// with a malformed date still displays and filters normally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub sector: String,
    pub assignee: String,
    pub due_date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
