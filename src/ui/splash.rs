//! Intro rendering with the studio wordmark

use crate::state::catalog::{HERO_HEADLINE, STUDIO_TAGLINE};
use crate::state::{SplashPhase, SplashState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const WORDMARK: [&str; 6] = [
    "████████╗███████╗██████╗ ██████╗ ██╗   ██╗",
    "╚══██╔══╝██╔════╝██╔══██╗██╔══██╗╚██╗ ██╔╝",
    "   ██║   █████╗  ██████╔╝██████╔╝ ╚████╔╝ ",
    "   ██║   ██╔══╝  ██╔══██╗██╔══██╗  ╚██╔╝  ",
    "   ██║   ███████╗██║  ██║██║  ██║   ██║   ",
    "   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   ",
];

const WORDMARK_WIDTH: u16 = 42;

/// Leading part of `text` for a reveal fraction, on char boundaries
fn revealed(text: &str, fraction: f32) -> &str {
    let total = text.chars().count();
    let shown = ((total as f32) * fraction.clamp(0.0, 1.0)).round() as usize;
    match text.char_indices().nth(shown) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Draw the intro screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let style = Style::default().fg(Color::Magenta);
    let mut lines: Vec<Line> = WORDMARK
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        STUDIO_TAGLINE.to_uppercase(),
        Style::default().fg(Color::Gray),
    )));

    let logo_height = lines.len() as u16;

    // Center, then slide off the top by the scroll offset
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(WORDMARK_WIDTH)) / 2;

    let top = area.y as i32;
    let lines_off_top = (top - y_pos).max(0) as usize;
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = y_pos.max(top) as u16;

    let logo_area = Rect {
        x,
        y: render_y,
        width: WORDMARK_WIDTH.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y.saturating_sub(area.y))),
    };
    frame.render_widget(
        Paragraph::new(visible_lines).alignment(ratatui::layout::Alignment::Center),
        logo_area,
    );

    if splash_state.phase != SplashPhase::Display || area.height < 4 {
        return;
    }

    let headline = revealed(HERO_HEADLINE, splash_state.reveal);
    let headline_y = (render_y + visible_height + 1).min(area.y + area.height - 3);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            headline,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        Rect {
            x: area.x,
            y: headline_y,
            width: area.width,
            height: 1,
        },
    );

    let hint = "Press any key to skip";
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        },
    );
}
