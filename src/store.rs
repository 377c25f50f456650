//! In-memory task store and date utilities.
//!
//! This module provides the `TaskStore` struct that owns the task
//! sequence and the active screen. State is volatile: the store starts
//! from the embedded seed fixture and nothing is ever written back out,
//! so a restart resets the board.

use chrono::NaiveDate;

use crate::fields::View;
use crate::task::Task;

/// Demo records shown on first launch.
const SEED_TASKS: &str = include_str!("seed_tasks.json");

/// Owner of the task sequence (most recent first) and the active screen.
///
/// Mutation happens only through [`TaskStore::add_task`] and
/// [`TaskStore::set_view`]; both always succeed. Everything else reads.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    view: View,
}

impl TaskStore {
    /// Empty store, list screen active.
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Store pre-populated from the embedded seed fixture.
    pub fn seeded() -> Self {
        let tasks = match serde_json::from_str(SEED_TASKS) {
            Ok(tasks) => tasks,
            Err(e) => {
                eprintln!("Error parsing seed tasks, starting empty: {e}");
                Vec::new()
            }
        };
        TaskStore {
            tasks,
            view: View::Tasks,
        }
    }

    /// Insert a fully formed task at the front of the sequence and land
    /// back on the list screen.
    ///
    /// No checks happen here. The capture form validates before it builds
    /// the record, and anything handed in is stored as given.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.insert(0, task);
        self.view = View::Tasks;
    }

    /// Switch the active screen.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// The active screen.
    pub fn view(&self) -> View {
        self.view
    }

    /// The task sequence, most recent first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Generate the next available task ID.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}

/// Parse an operator-typed due date. Only ISO `YYYY-MM-DD` is accepted;
/// anything else yields `None`.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Priority, Status};

    fn sample_task(id: u64) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: String::new(),
            priority: Priority::Media,
            status: Status::Todo,
            sector: "NETWORK".to_string(),
            assignee: "Bruno Costa".to_string(),
            due_date: "2024-10-25".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_seeded_store_has_demo_records() {
        let store = TaskStore::seeded();
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.tasks()[0].id, 1);
        assert_eq!(store.tasks()[0].title, "Fixing Server A - Main Hub");
        assert_eq!(store.tasks()[1].status, Status::Todo);
        assert_eq!(store.tasks()[2].status, Status::Done);
        assert_eq!(store.view(), View::Tasks);
    }

    #[test]
    fn test_add_task_prepends_and_returns_to_list() {
        let mut store = TaskStore::seeded();
        store.set_view(View::NewTask);
        let id = store.next_id();
        store.add_task(sample_task(id));
        assert_eq!(store.tasks().len(), 4);
        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.view(), View::Tasks);
    }

    #[test]
    fn test_next_id_is_highest_plus_one() {
        let mut store = TaskStore::new();
        assert_eq!(store.next_id(), 1);
        store.add_task(sample_task(7));
        store.add_task(sample_task(2));
        assert_eq!(store.next_id(), 8);
    }

    #[test]
    fn test_set_view_round_trip() {
        let mut store = TaskStore::new();
        for view in [View::Analytics, View::NewTask, View::Settings, View::Tasks] {
            store.set_view(view);
            assert_eq!(store.view(), view);
        }
    }

    #[test]
    fn test_get_finds_by_id() {
        let store = TaskStore::seeded();
        assert_eq!(store.get(2).map(|t| t.title.as_str()), Some("Cabling Audit: Sector 4"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_parse_due_date_iso_only() {
        assert_eq!(
            parse_due_date("2024-10-24"),
            NaiveDate::from_ymd_opt(2024, 10, 24)
        );
        assert_eq!(
            parse_due_date(" 2025-01-01 "),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert!(parse_due_date("24/10/2024").is_none());
        assert!(parse_due_date("amanhã").is_none());
        assert!(parse_due_date("2024-13-45").is_none());
        assert!(parse_due_date("").is_none());
    }
}
