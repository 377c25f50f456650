//! # GIC - Belém Digital Task Board
//!
//! A terminal task board for the GIC - Belém Digital field teams: the
//! tracked task list, a guided capture form, a performance dashboard and
//! a settings screen, all reachable from one keyboard-driven interface.
//!
//! ## Key Features
//!
//! - **Task List**: Sector, priority, status and due date per task, with
//! status filter pills and overdue highlighting
//! - **Capture Form**: Required-field validation, a priority selector and
//! free-form tags with a pending-tag buffer
//! - **Analytics**: Active and overdue counters computed from the board,
//! plus the daily goal gauge and the weekly performance chart
//! - **In-Memory Board**: Starts from a small demo dataset (or empty with
//! `--empty`); nothing is written to disk
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the board with the demo tasks
//! gic
//!
//! # Launch with an empty board
//! gic --empty
//! ```
//!
//! ## Keys
//!
//! - `1`/`2`/`3` switch between the task list, analytics and settings
//! - `Left`/`Right` cycle the status filter on the list
//! - `n` opens the capture form; `Enter` saves, `Esc` cancels
//! - `q` quits

use clap::Parser;

pub mod analytics;
pub mod cli;
pub mod fields;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use store::TaskStore;

fn main() {
    let cli = Cli::parse();

    let store = if cli.empty {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    };

    if let Err(e) = tui::run::run_tui(store) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}
