//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    initial_tasks: Vec<String>,
    mouse_enabled: bool,
    light_theme: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create an application with an empty task list.
    pub const fn new() -> Self {
        Self {
            initial_tasks: Vec::new(),
            mouse_enabled: true,
            light_theme: false,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Seed the session with tasks. They are not persisted.
    pub fn with_tasks(mut self, tasks: Vec<String>) -> Self {
        self.initial_tasks = tasks;
        self
    }

    /// Enable or disable mouse capture.
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Use the palette tuned for light terminal backgrounds.
    pub const fn with_light_theme(mut self, light: bool) -> Self {
        self.light_theme = light;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
