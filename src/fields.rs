//! Enumerations for the structured task fields.
//!
//! Every categorical value on the board is a closed enum: priorities,
//! statuses, the active screen and the list filter. Consumers match on
//! them exhaustively, so adding a variant is a compile-time event rather
//! than a stray string.

use serde::{Deserialize, Serialize};

/// Priority bands used on task cards, in the team's own wording.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Alta,
    #[default]
    Media,
    Baixa,
}

/// Task completion status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

/// The four screens of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Tasks,
    Analytics,
    NewTask,
    Settings,
}

/// List-view filter: every task, or exactly one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Pill order of the filter bar.
    pub const BAR: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(Status::Todo),
        StatusFilter::Only(Status::InProgress),
        StatusFilter::Only(Status::Done),
    ];

    /// Whether a task with `status` is visible under this filter.
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }

    /// The pill to the right, wrapping past the end.
    pub fn next(self) -> StatusFilter {
        let pos = Self::BAR.iter().position(|&f| f == self).unwrap_or(0);
        Self::BAR[(pos + 1) % Self::BAR.len()]
    }

    /// The pill to the left, wrapping past the start.
    pub fn prev(self) -> StatusFilter {
        let pos = Self::BAR.iter().position(|&f| f == self).unwrap_or(0);
        Self::BAR[(pos + Self::BAR.len() - 1) % Self::BAR.len()]
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Alta => "Alta",
        Priority::Media => "Média",
        Priority::Baixa => "Baixa",
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "To Do",
        Status::InProgress => "In Progress",
        Status::Done => "Done",
    }
}

/// Format a filter pill for display.
pub fn format_filter(f: StatusFilter) -> &'static str {
    match f {
        StatusFilter::All => "All Tasks",
        StatusFilter::Only(s) => format_status(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_matches_every_status() {
        for status in [Status::Todo, Status::InProgress, Status::Done] {
            assert!(StatusFilter::All.matches(status));
        }
    }

    #[test]
    fn test_filter_only_matches_single_status() {
        let filter = StatusFilter::Only(Status::InProgress);
        assert!(filter.matches(Status::InProgress));
        assert!(!filter.matches(Status::Todo));
        assert!(!filter.matches(Status::Done));
    }

    #[test]
    fn test_filter_cycle_wraps_both_ways() {
        let mut filter = StatusFilter::All;
        for expected in [
            StatusFilter::Only(Status::Todo),
            StatusFilter::Only(Status::InProgress),
            StatusFilter::Only(Status::Done),
            StatusFilter::All,
        ] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
        assert_eq!(StatusFilter::All.prev(), StatusFilter::Only(Status::Done));
    }

    #[test]
    fn test_status_serde_spelling() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: Status = serde_json::from_str("\"todo\"").unwrap();
        assert_eq!(back, Status::Todo);
    }
}
