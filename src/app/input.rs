use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, Message, Model};
use crate::ui::layout::contains;
use crate::ui::{TableHit, screen_layout};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: usize = 1;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            Event::Paste(text) if model.focus == Focus::Input => {
                Some(Message::InputPaste(text.replace(['\r', '\n'], " ")))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
            return Some(Message::Quit);
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if key.code == KeyCode::F(1) {
            return Some(Message::ToggleHelp);
        }

        match model.focus {
            Focus::Input => Self::handle_input_key(key),
            Focus::List => Self::handle_list_key(key, model),
        }
    }

    fn handle_input_key(key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => Some(Message::Commit),
            KeyCode::Esc => Some(Message::Cancel),
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab => Some(Message::FocusList),
            KeyCode::Backspace => Some(Message::InputBackspace),
            KeyCode::Delete => Some(Message::InputDelete),
            KeyCode::Left => Some(Message::InputLeft),
            KeyCode::Right => Some(Message::InputRight),
            KeyCode::Home => Some(Message::InputHome),
            KeyCode::End => Some(Message::InputEnd),
            KeyCode::Char('u') if ctrl => Some(Message::SetInput(String::new())),
            KeyCode::Char('a') if ctrl => Some(Message::InputHome),
            KeyCode::Char('e') if ctrl => Some(Message::InputEnd),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InputChar(c))
            }
            _ => None,
        }
    }

    fn handle_list_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::SelectRow(0)),
            KeyCode::Char('G') | KeyCode::End => {
                Some(Message::SelectRow(model.tasks.len().saturating_sub(1)))
            }
            KeyCode::PageDown => Some(Message::ScrollDown(model.visible_rows().max(1))),
            KeyCode::PageUp => Some(Message::ScrollUp(model.visible_rows().max(1))),
            KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteSelected),
            KeyCode::Char('e') | KeyCode::Enter => Some(Message::EditSelected),
            KeyCode::Char('i' | 'a') | KeyCode::Tab | KeyCode::BackTab => {
                Some(Message::FocusInput)
            }
            KeyCode::Esc => Some(Message::Cancel),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return match mouse.kind {
                MouseEventKind::Up(MouseButton::Left) => Some(Message::HideHelp),
                _ => None,
            };
        }

        let layout = screen_layout(Rect::new(0, 0, model.width, model.height));
        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                let (column, row) = (mouse.column, mouse.row);
                if contains(layout.submit_button, column, row) {
                    return Some(Message::Commit);
                }
                if contains(layout.cancel_button, column, row) {
                    return Some(Message::Cancel);
                }
                if contains(layout.input, column, row) {
                    return Some(Message::FocusInput);
                }
                match layout.table_hit(column, row, model.list_scroll_offset, model.tasks.len()) {
                    Some(TableHit::Delete(index)) => Some(Message::DeleteTask(index)),
                    Some(TableHit::Edit(index)) => Some(Message::EditTask(index)),
                    Some(TableHit::Task(index)) => Some(Message::SelectRow(index)),
                    None if contains(layout.table, column, row) => Some(Message::FocusList),
                    None => None,
                }
            }
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_ROWS)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_ROWS)),
            _ => None,
        }
    }
}
