use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::tasks::TaskListController;

/// How long a toast stays on the status line.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The text input box
    #[default]
    Input,
    /// The task table
    List,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Task list, input buffer and edit cursor
    pub tasks: TaskListController,
    /// Pane receiving keyboard input
    pub focus: Focus,
    /// Highlighted row in the task table
    pub selected: Option<usize>,
    /// Index of the first task row shown in the table
    pub list_scroll_offset: usize,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Use the light-background palette
    pub light_theme: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a new model around a controller.
    pub fn new(tasks: TaskListController, terminal_size: (u16, u16)) -> Self {
        Self {
            tasks,
            focus: Focus::Input,
            selected: None,
            list_scroll_offset: 0,
            width: terminal_size.0,
            height: terminal_size.1,
            light_theme: false,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            toast: None,
            should_quit: false,
        }
    }

    /// Number of task rows the table can show at the current size.
    pub fn visible_rows(&self) -> usize {
        crate::ui::table_capacity(self.width, self.height)
    }

    fn max_scroll_offset(&self) -> usize {
        self.tasks.len().saturating_sub(self.visible_rows().max(1))
    }

    /// Range of task indices currently on screen.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.list_scroll_offset.min(self.tasks.len());
        let end = (start + self.visible_rows()).min(self.tasks.len());
        start..end
    }

    /// Highlight a row and scroll it into view.
    pub(super) fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.tasks.len());
        self.ensure_selection_visible();
    }

    /// Keep the selection pointing at an existing row after the list shrank.
    pub(super) fn clamp_selection(&mut self) {
        let len = self.tasks.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
        self.ensure_selection_visible();
    }

    pub(super) fn ensure_selection_visible(&mut self) {
        let capacity = self.visible_rows().max(1);
        if let Some(selected) = self.selected {
            if selected < self.list_scroll_offset {
                self.list_scroll_offset = selected;
            } else if selected >= self.list_scroll_offset + capacity {
                self.list_scroll_offset = selected + 1 - capacity;
            }
        }
        self.list_scroll_offset = self.list_scroll_offset.min(self.max_scroll_offset());
    }

    pub(super) fn scroll_down(&mut self, n: usize) {
        self.list_scroll_offset = (self.list_scroll_offset + n).min(self.max_scroll_offset());
    }

    pub(super) const fn scroll_up(&mut self, n: usize) {
        self.list_scroll_offset = self.list_scroll_offset.saturating_sub(n);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(TaskListController::new(), (80, 24))
    }
}
