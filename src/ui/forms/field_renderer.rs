//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Build the lines for a field, with the cursor after the last character
fn field_lines<'a>(field: &'a FormField, value: &'a str, is_active: bool) -> Vec<Line<'a>> {
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    if value.is_empty() {
        let placeholder = Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        return vec![Line::from(vec![cursor, placeholder])];
    }

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines: Vec<Line> = if field.is_multiline {
        // split keeps a trailing empty line so the cursor follows a newline
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value, value_style))]
    };
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }
    lines
}

/// Draw a form field with the given value; empty fields show their placeholder
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(field_lines(field, value, is_active))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(content, area);
}
