use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model, ToastLevel};

use super::style::Palette;

pub fn render_status_bar(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let count = model.tasks.len();
    let noun = if count == 1 { "task" } else { "tasks" };
    let mode = model
        .tasks
        .edit_cursor()
        .map_or_else(String::new, |i| format!("  [editing #{}]", i + 1));
    let hints = match model.focus {
        Focus::Input => "Enter: commit  Esc: cancel  Tab: list",
        Focus::List => "d: delete  e: edit  Tab: input",
    };
    let status = format!(" {count} {noun}{mode}  {hints}  ?:help");
    frame.render_widget(Paragraph::new(status).style(palette.status), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) -> bool {
    let Some((message, level)) = model.active_toast() else {
        return false;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
    true
}
