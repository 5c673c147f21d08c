use tracing::warn;

use crate::app::model::{Focus, Model, ToastLevel};
use crate::perf::log_event;
use crate::tasks::{Commit, TaskError};

/// Longest task preview shown in a toast.
const TOAST_PREVIEW_CHARS: usize = 32;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Input box
    /// Insert a character at the caret
    InputChar(char),
    /// Delete the character before the caret
    InputBackspace,
    /// Delete the character under the caret
    InputDelete,
    /// Move caret left
    InputLeft,
    /// Move caret right
    InputRight,
    /// Move caret to start of input
    InputHome,
    /// Move caret to end of input
    InputEnd,
    /// Insert pasted text at the caret
    InputPaste(String),
    /// Replace the input text
    SetInput(String),

    // Task operations
    /// Submit a new task or save the one being edited
    Commit,
    /// Abandon the current draft or edit
    Cancel,
    /// Delete the task at a row index
    DeleteTask(usize),
    /// Load the task at a row index into the input
    EditTask(usize),
    /// Delete the highlighted task
    DeleteSelected,
    /// Edit the highlighted task
    EditSelected,

    // Table navigation
    /// Highlight the next row
    SelectNext,
    /// Highlight the previous row
    SelectPrev,
    /// Highlight a specific row
    SelectRow(usize),
    /// Scroll table up by n rows
    ScrollUp(usize),
    /// Scroll table down by n rows
    ScrollDown(usize),

    // Focus
    /// Focus the input box
    FocusInput,
    /// Focus the task table
    FocusList,
    /// Toggle focus between input and table
    SwitchFocus,

    // Other
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

impl Message {
    /// Step name used for update timings.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InputChar(_) => "update.input_char",
            Self::InputBackspace => "update.input_backspace",
            Self::InputDelete => "update.input_delete",
            Self::InputLeft | Self::InputRight | Self::InputHome | Self::InputEnd => {
                "update.input_caret"
            }
            Self::InputPaste(_) => "update.input_paste",
            Self::SetInput(_) => "update.set_input",
            Self::Commit => "update.commit",
            Self::Cancel => "update.cancel",
            Self::DeleteTask(_) | Self::DeleteSelected => "update.delete",
            Self::EditTask(_) | Self::EditSelected => "update.edit",
            Self::SelectNext | Self::SelectPrev | Self::SelectRow(_) => "update.select",
            Self::ScrollUp(_) | Self::ScrollDown(_) => "update.scroll",
            Self::FocusInput | Self::FocusList | Self::SwitchFocus => "update.focus",
            Self::ToggleHelp | Self::HideHelp => "update.help",
            Self::Resize(..) => "update.resize",
            Self::Quit => "update.quit",
        }
    }
}

/// Pure state transition: apply a message to the model.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Input box
        Message::InputChar(c) => {
            model.focus = Focus::Input;
            model.tasks.input_mut().insert_char(c);
        }
        Message::InputBackspace => model.tasks.input_mut().backspace(),
        Message::InputDelete => model.tasks.input_mut().delete_forward(),
        Message::InputLeft => model.tasks.input_mut().move_left(),
        Message::InputRight => model.tasks.input_mut().move_right(),
        Message::InputHome => model.tasks.input_mut().move_home(),
        Message::InputEnd => model.tasks.input_mut().move_end(),
        Message::InputPaste(text) => model.tasks.input_mut().insert_str(&text),
        Message::SetInput(text) => model.tasks.set_input(text),

        // Task operations
        Message::Commit => commit(&mut model),
        Message::Cancel => {
            model.tasks.cancel();
            model.focus = Focus::Input;
        }
        Message::DeleteTask(index) => delete(&mut model, index),
        Message::EditTask(index) => edit(&mut model, index),
        Message::DeleteSelected => {
            if let Some(index) = model.selected {
                delete(&mut model, index);
            }
        }
        Message::EditSelected => {
            if let Some(index) = model.selected {
                edit(&mut model, index);
            }
        }

        // Table navigation
        Message::SelectNext => {
            let next = match model.selected {
                Some(i) => (i + 1).min(model.tasks.len().saturating_sub(1)),
                None => model.list_scroll_offset,
            };
            model.select(Some(next));
        }
        Message::SelectPrev => {
            let prev = model.selected.map_or(0, |i| i.saturating_sub(1));
            model.select(Some(prev));
        }
        Message::SelectRow(index) => {
            model.focus = Focus::List;
            model.select(Some(index));
        }
        Message::ScrollUp(n) => model.scroll_up(n),
        Message::ScrollDown(n) => model.scroll_down(n),

        // Focus
        Message::FocusInput => model.focus = Focus::Input,
        Message::FocusList => focus_list(&mut model),
        Message::SwitchFocus => match model.focus {
            Focus::Input => focus_list(&mut model),
            Focus::List => model.focus = Focus::Input,
        },

        // Other
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            model.ensure_selection_visible();
        }
        Message::Quit => model.should_quit = true,
    }
    model
}

fn focus_list(model: &mut Model) {
    model.focus = Focus::List;
    if model.selected.is_none() && !model.tasks.is_empty() {
        let first_visible = model.list_scroll_offset;
        model.select(Some(first_visible));
    }
}

fn commit(model: &mut Model) {
    let pending = model.tasks.pending_commit();
    match model.tasks.commit(pending) {
        Ok(true) => {
            log_event(
                "task.commit",
                format!("{pending:?} len={}", model.tasks.len()),
            );
            match pending {
                Commit::Create => {
                    let last = model.tasks.len().saturating_sub(1);
                    model.select(Some(last));
                    model.show_toast(ToastLevel::Info, "Task added");
                }
                Commit::UpdateAt(index) => {
                    model.select(Some(index));
                    model.show_toast(ToastLevel::Info, "Task saved");
                }
            }
        }
        // Blank input is ignored without feedback.
        Ok(false) => log_event("task.commit", format!("{pending:?} ignored blank input")),
        Err(err) => {
            model.tasks.cancel();
            report(model, "task.commit", &err);
        }
    }
}

fn delete(model: &mut Model, index: usize) {
    match model.tasks.delete(index) {
        Ok(removed) => {
            log_event(
                "task.delete",
                format!("index={index} len={}", model.tasks.len()),
            );
            model.clamp_selection();
            model.show_toast(
                ToastLevel::Info,
                format!("Deleted \"{}\"", preview(&removed)),
            );
        }
        Err(err) => report(model, "task.delete", &err),
    }
}

fn edit(model: &mut Model, index: usize) {
    match model.tasks.edit(index) {
        Ok(()) => {
            log_event("task.edit", format!("index={index}"));
            model.select(Some(index));
            model.focus = Focus::Input;
        }
        Err(err) => report(model, "task.edit", &err),
    }
}

fn report(model: &mut Model, op: &str, err: &TaskError) {
    warn!(%err, op, "task operation rejected");
    log_event(op, format!("rejected: {err}"));
    model.show_toast(ToastLevel::Warning, err.to_string());
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= TOAST_PREVIEW_CHARS {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(TOAST_PREVIEW_CHARS - 1).collect();
    short.push('…');
    short
}
