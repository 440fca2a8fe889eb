//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Normal,
    Selected,
    Disabled,
    Success,
    Danger,
}

impl ButtonTone {
    fn color(self) -> Color {
        match self {
            Self::Normal => Color::Gray,
            Self::Selected => Color::Cyan,
            Self::Disabled => Color::DarkGray,
            Self::Success => Color::Green,
            Self::Danger => Color::Red,
        }
    }
}

/// Render a bordered button with centered content
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, tone: ButtonTone) {
    let color = tone.color();
    let mut text_style = Style::default().fg(color);
    if !matches!(tone, ButtonTone::Normal | ButtonTone::Disabled) {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Render a sidebar button with key and label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_selected: bool,
) {
    let tone = if is_selected {
        ButtonTone::Selected
    } else {
        ButtonTone::Normal
    };
    render_button(frame, area, &format!("{key} {label}"), tone);
}
