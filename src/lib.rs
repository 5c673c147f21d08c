// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. tasks::TaskError)
    clippy::module_name_repetitions
)]

//! # Tasklist
//!
//! A terminal to-do list with inline editing.
//!
//! Tasklist shows a single screen with:
//! - A text input for new tasks
//! - Submit/Save and Cancel buttons
//! - A table of tasks with per-row Delete and Edit actions
//!
//! Tasks live in memory for the session only.
//!
//! ## Architecture
//!
//! Tasklist uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state, wrapping a [`tasks::TaskListController`]
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`tasks`]: Task list, input buffer and edit cursor
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Command-line flag defaults
//! - [`perf`]: Update timings and render debug log

pub mod app;
pub mod config;
pub mod perf;
pub mod tasks;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::tasks::{Commit, InputBuffer, TaskError, TaskListController};
}
