//! Screen regions.
//!
//! Rendering and mouse handling both derive their geometry from
//! [`screen_layout`], so a click always lands on what was painted there.

use ratatui::layout::{Constraint, Layout, Rect};

use super::{BUTTON_WIDTH, DELETE_COLUMN_WIDTH, EDIT_COLUMN_WIDTH};

// Fixed-height regions; the table takes whatever is left.
const HEADER_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const BUTTON_ROW_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub submit_button: Rect,
    pub cancel_button: Rect,
    /// Bordered table block, including the column header row
    pub table: Rect,
    pub status: Rect,
}

/// Which cell of a task row a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    Task(usize),
    Delete(usize),
    Edit(usize),
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, input, buttons, table, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(BUTTON_ROW_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);
    let [submit_button, cancel_button, _] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Fill(1),
    ])
    .spacing(1)
    .areas(buttons);
    ScreenLayout {
        header,
        input,
        submit_button,
        cancel_button,
        table,
        status,
    }
}

impl ScreenLayout {
    /// Area inside the table border.
    pub const fn table_inner(&self) -> Rect {
        Rect::new(
            self.table.x.saturating_add(1),
            self.table.y.saturating_add(1),
            self.table.width.saturating_sub(2),
            self.table.height.saturating_sub(2),
        )
    }

    /// Row where the column titles are drawn.
    pub const fn table_header_row(&self) -> Rect {
        let inner = self.table_inner();
        Rect::new(inner.x, inner.y, inner.width, if inner.height > 0 { 1 } else { 0 })
    }

    /// Number of task rows that fit under the column titles.
    pub const fn table_rows(&self) -> usize {
        self.table_inner().height.saturating_sub(1) as usize
    }

    /// Split a table row into task, delete and edit cells.
    pub fn row_cells(&self, row: Rect) -> [Rect; 3] {
        Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(DELETE_COLUMN_WIDTH),
            Constraint::Length(EDIT_COLUMN_WIDTH),
        ])
        .spacing(1)
        .areas(row)
    }

    /// Screen row for the `slot`-th visible task.
    pub const fn row_rect(&self, slot: usize) -> Rect {
        let inner = self.table_inner();
        // slot < table_rows() <= u16::MAX
        #[allow(clippy::cast_possible_truncation)]
        let y = inner.y + 1 + slot as u16;
        Rect::new(inner.x, y, inner.width, 1)
    }

    /// Resolve a point to a task cell, given the first visible task index
    /// and the number of tasks.
    pub fn table_hit(&self, column: u16, row: u16, offset: usize, len: usize) -> Option<TableHit> {
        let inner = self.table_inner();
        if !contains(inner, column, row) || row == inner.y {
            return None;
        }
        let slot = (row - inner.y - 1) as usize;
        let index = offset + slot;
        if slot >= self.table_rows() || index >= len {
            return None;
        }
        let [task, delete, edit] = self.row_cells(self.row_rect(slot));
        if contains(delete, column, row) {
            Some(TableHit::Delete(index))
        } else if contains(edit, column, row) {
            Some(TableHit::Edit(index))
        } else if contains(task, column, row) {
            Some(TableHit::Task(index))
        } else {
            None
        }
    }
}

/// Task rows visible for a terminal of the given size.
pub fn table_capacity(width: u16, height: u16) -> usize {
    screen_layout(Rect::new(0, 0, width, height)).table_rows()
}

pub const fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
