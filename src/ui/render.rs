use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{Focus, Model};

use super::layout::{ScreenLayout, screen_layout};
use super::style::{Palette, palette, selected};
use super::{overlays, status};

const TITLE: &str = "To-Do List";
const PLACEHOLDER: &str = "Add a new task...";

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = screen_layout(area);
    let palette = palette(model.light_theme);

    render_header(&palette, frame, layout.header);
    render_input(model, &palette, frame, layout.input);
    render_buttons(model, &palette, frame, &layout);
    render_table(model, &palette, frame, &layout);
    if !status::render_toast_bar(model, frame, layout.status) {
        status::render_status_bar(model, &palette, frame, layout.status);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_header(palette: &Palette, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(palette.header);
    frame.render_widget(header, area);
}

fn render_input(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Input && !model.help_visible;
    let title = if model.tasks.is_editing() {
        "Edit task"
    } else {
        "New task"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            palette.input_focused_border
        } else {
            palette.border
        })
        .style(palette.input);
    let inner = block.inner(area);

    let input = model.tasks.input();
    let text = if input.is_empty() {
        Line::styled(PLACEHOLDER, palette.placeholder)
    } else {
        Line::raw(input.text())
    };
    // Keep the caret on screen by scrolling long input horizontally.
    let caret = u16::try_from(input.display_width_before_cursor()).unwrap_or(u16::MAX);
    let scroll_x = caret.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(text).block(block).scroll((0, scroll_x)), area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + caret - scroll_x, inner.y));
    }
}

fn render_buttons(model: &Model, palette: &Palette, frame: &mut Frame, layout: &ScreenLayout) {
    let commit_icon = if model.tasks.is_editing() { "✓" } else { "+" };
    let commit = format!("{commit_icon} {}", model.tasks.commit_label());
    render_button(palette, frame, layout.submit_button, &commit);
    render_button(palette, frame, layout.cancel_button, "✗ Cancel");
}

fn render_button(palette: &Palette, frame: &mut Frame, area: Rect, label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border);
    let button = Paragraph::new(Line::styled(label.to_string(), palette.button))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

fn render_table(model: &Model, palette: &Palette, frame: &mut Frame, layout: &ScreenLayout) {
    let list_focused = model.focus == Focus::List && !model.help_visible;
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(if list_focused {
            palette.input_focused_border
        } else {
            palette.border
        });
    frame.render_widget(block, layout.table);

    let titles = layout.table_header_row();
    if titles.height == 0 {
        return;
    }
    let [task_col, delete_col, edit_col] = layout.row_cells(titles);
    frame.render_widget(Paragraph::new(" Task").style(palette.table_titles), task_col);
    frame.render_widget(
        Paragraph::new("Delete")
            .alignment(Alignment::Center)
            .style(palette.table_titles),
        delete_col,
    );
    frame.render_widget(
        Paragraph::new("Edit")
            .alignment(Alignment::Center)
            .style(palette.table_titles),
        edit_col,
    );

    if model.tasks.is_empty() {
        let empty = layout.row_rect(0);
        if layout.table_rows() > 0 {
            frame.render_widget(
                Paragraph::new(" No tasks yet").style(palette.placeholder),
                empty,
            );
        }
        return;
    }

    let editing = model.tasks.edit_cursor();
    let total = model.tasks.len();
    let start = model.list_scroll_offset.min(total);
    let end = (start + layout.table_rows()).min(total);
    for (slot, index) in (start..end).enumerate() {
        let task = &model.tasks.tasks()[index];
        let [task_cell, delete_cell, edit_cell] = layout.row_cells(layout.row_rect(slot));
        let base = if editing == Some(index) {
            palette.row_editing
        } else {
            palette.row
        };
        let style = if model.selected == Some(index) {
            selected(base)
        } else {
            base
        };
        let marker = if editing == Some(index) { "✎" } else { " " };
        frame.render_widget(
            Paragraph::new(format!("{marker}{task}")).style(style),
            task_cell,
        );
        frame.render_widget(
            Paragraph::new("[Delete]")
                .alignment(Alignment::Center)
                .style(palette.action),
            delete_cell,
        );
        frame.render_widget(
            Paragraph::new("[Edit]")
                .alignment(Alignment::Center)
                .style(palette.action),
            edit_cell,
        );
    }

    if start > 0 || end < total {
        let hint = format!(" {}-{end} of {total} ", start + 1);
        let width = u16::try_from(hint.len()).unwrap_or(u16::MAX);
        let x = layout.table.x + layout.table.width.saturating_sub(width.saturating_add(1));
        let y = layout.table.y + layout.table.height.saturating_sub(1);
        let area = Rect::new(x, y, width.min(layout.table.width), 1).intersection(layout.table);
        frame.render_widget(Paragraph::new(hint).style(palette.border), area);
    }
}
