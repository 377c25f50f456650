//! Dashboard indicators.
//!
//! Two numbers are computed live from the task sequence: how many tasks
//! are still active and how many are overdue. Everything else on the
//! dashboard is a fixed mock figure, kept as constants here so the
//! rendering code cannot drift from the announced values.

use chrono::NaiveDate;

use crate::fields::Status;
use crate::store::parse_due_date;
use crate::task::Task;

/// Mock completion series for the weekly chart, Monday through Sunday.
pub const WEEKLY_PERFORMANCE: [(&str, u64); 7] = [
    ("Seg", 10),
    ("Ter", 15),
    ("Qua", 12),
    ("Qui", 22),
    ("Sex", 18),
    ("Sab", 28),
    ("Dom", 20),
];

/// Mock count of tasks completed today.
pub const DONE_TODAY: u64 = 12;

/// Mock daily goal behind the progress gauge.
pub const DAILY_GOAL: u64 = 16;

/// Mock progress percentage towards the daily goal.
pub const DAILY_PROGRESS_PCT: u16 = 75;

/// Mock tasks remaining to hit the daily goal.
pub const DAILY_REMAINING: u64 = 4;

/// Mock week-over-week trend badge.
pub const WEEKLY_TREND: &str = "+12%";

/// Mock productivity insight shown under the chart.
pub const DAILY_INSIGHT: &str = "O horário de maior produtividade hoje foi entre as 10h e 11h.";

/// Number of tasks not yet done.
pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.status != Status::Done).count()
}

/// Whether a task counts as overdue on `today`.
///
/// Overdue means the due date parses and falls strictly before `today`,
/// and the task is not done. A date that does not parse never flags the
/// task; due today is not overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.status == Status::Done {
        return false;
    }
    match parse_due_date(&task.due_date) {
        Some(due) => due < today,
        None => false,
    }
}

/// Number of tasks overdue on `today`.
pub fn overdue_count(tasks: &[Task], today: NaiveDate) -> usize {
    tasks.iter().filter(|t| is_overdue(t, today)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::store::TaskStore;

    fn task(id: u64, status: Status, due_date: &str) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: String::new(),
            priority: Priority::Media,
            status,
            sector: "SOFTWARE".to_string(),
            assignee: "Ana Silva".to_string(),
            due_date: due_date.to_string(),
            tags: Vec::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 26).unwrap()
    }

    #[test]
    fn test_active_count_excludes_done() {
        let tasks = vec![
            task(1, Status::InProgress, "2024-10-24"),
            task(2, Status::Todo, "2024-10-25"),
            task(3, Status::Done, "2024-10-22"),
        ];
        assert_eq!(active_count(&tasks), 2);
    }

    #[test]
    fn test_seeded_board_has_two_active_tasks() {
        let store = TaskStore::seeded();
        assert_eq!(active_count(store.tasks()), 2);
    }

    #[test]
    fn test_far_past_due_date_is_overdue() {
        let t = task(1, Status::InProgress, "2000-01-01");
        assert!(is_overdue(&t, today()));
    }

    #[test]
    fn test_done_task_is_never_overdue() {
        let t = task(1, Status::Done, "2000-01-01");
        assert!(!is_overdue(&t, today()));
    }

    #[test]
    fn test_unparseable_due_date_is_not_overdue() {
        for due in ["soon", "31/12/1999", "", "2024-99-99"] {
            let t = task(1, Status::Todo, due);
            assert!(!is_overdue(&t, today()), "due {due:?} flagged overdue");
        }
    }

    #[test]
    fn test_due_today_or_later_is_not_overdue() {
        assert!(!is_overdue(&task(1, Status::Todo, "2024-10-26"), today()));
        assert!(!is_overdue(&task(2, Status::Todo, "2024-11-01"), today()));
    }

    #[test]
    fn test_overdue_count_on_mixed_board() {
        let tasks = vec![
            task(1, Status::InProgress, "2024-10-24"),
            task(2, Status::Todo, "2024-10-25"),
            task(3, Status::Done, "2024-10-22"),
            task(4, Status::Todo, "not-a-date"),
        ];
        assert_eq!(overdue_count(&tasks, today()), 2);
    }
}
