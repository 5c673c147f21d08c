//! Theming and color definitions.
//!
//! Two palettes share the same roles: one for dark terminal backgrounds and
//! one for light ones. The light palette uses the teal and green tones of
//! the classic to-do layout; the dark palette keeps contrast with indexed
//! colors.

use ratatui::style::{Color, Modifier, Style};

/// Colors for each role on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header: Style,
    pub input: Style,
    pub input_focused_border: Style,
    pub placeholder: Style,
    pub button: Style,
    pub table_titles: Style,
    pub row: Style,
    pub row_editing: Style,
    pub action: Style,
    pub border: Style,
    pub status: Style,
}

const TEAL: Color = Color::Rgb(0x85, 0xBC, 0xAD);
const GREEN: Color = Color::Rgb(0x4C, 0xAF, 0x50);
const MINT: Color = Color::Rgb(0xE8, 0xF5, 0xE9);
const PALE_TEAL: Color = Color::Rgb(0xE0, 0xF2, 0xF1);

pub fn palette(light: bool) -> Palette {
    if light { light_palette() } else { dark_palette() }
}

fn light_palette() -> Palette {
    Palette {
        header: Style::default()
            .bg(TEAL)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        input: Style::default().bg(PALE_TEAL).fg(Color::Black),
        input_focused_border: Style::default().fg(GREEN),
        placeholder: Style::default().fg(Color::Indexed(245)),
        button: Style::default()
            .bg(Color::Green)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        table_titles: Style::default()
            .bg(GREEN)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        row: Style::default().bg(MINT).fg(Color::Black),
        row_editing: Style::default()
            .bg(MINT)
            .fg(Color::Indexed(22))
            .add_modifier(Modifier::ITALIC),
        action: Style::default().bg(Color::Green).fg(Color::White),
        border: Style::default().fg(TEAL),
        status: Style::default().bg(Color::Indexed(250)).fg(Color::Black),
    }
}

fn dark_palette() -> Palette {
    Palette {
        header: Style::default()
            .bg(Color::Indexed(30))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        input: Style::default().fg(Color::White),
        input_focused_border: Style::default().fg(Color::Yellow),
        placeholder: Style::default().fg(Color::Indexed(243)),
        button: Style::default()
            .bg(Color::Indexed(28))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        table_titles: Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        row: Style::default(),
        row_editing: Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
        action: Style::default().fg(Color::Cyan),
        border: Style::default().fg(Color::Indexed(66)),
        status: Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

/// Style for a highlighted row.
pub fn selected(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}
