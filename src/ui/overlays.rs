use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Input", section_style));
    lines.push(Line::raw("  Type                Edit the task text"));
    lines.push(Line::raw("  Enter               Submit / Save"));
    lines.push(Line::raw("  Esc                 Cancel draft or edit"));
    lines.push(Line::raw("  Ctrl-u              Clear input"));
    lines.push(Line::raw("  Tab / Down          Focus task list"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Task list", section_style));
    lines.push(Line::raw("  j/k or Up/Down      Select task"));
    lines.push(Line::raw("  g / G               First / last task"));
    lines.push(Line::raw("  e / Enter           Edit selected"));
    lines.push(Line::raw("  d / Delete          Delete selected"));
    lines.push(Line::raw("  i / Tab             Focus input"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Mouse", section_style));
    lines.push(Line::raw("  Click Submit/Save, Cancel, Delete or Edit"));
    lines.push(Line::raw("  Wheel               Scroll task list"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  q / Ctrl-c          Quit"));
    lines.push(Line::raw("  ? / F1              Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("any key closes", dim_style);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
