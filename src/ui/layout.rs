//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::{App, SIDEBAR_WIDTH};
use crate::contact::SubmissionStatus;
use crate::platform::{REFINE_SHORTCUT, SEND_SHORTCUT};
use crate::state::catalog::{STUDIO_NAME, STUDIO_TAGLINE};
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar items: key, label, view
const SIDEBAR_ITEMS: &[(&str, &str, View)] = &[
    ("g", "Home", View::Home),
    ("w", "Works", View::Works),
    ("c", "Contact", View::Contact),
];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Create full-width layout without sidebar (for the intro)
pub fn create_layout_no_sidebar(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area)[0]
}

/// Draw the sidebar: studio name on top, navigation buttons centered
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
    constraints.extend(SIDEBAR_ITEMS.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            STUDIO_NAME,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            STUDIO_TAGLINE,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(brand, chunks[0]);

    // The project page belongs to Works
    let active = match app.state.current_view {
        View::Project => View::Works,
        view => view,
    };

    for (idx, (key, label, view)) in SIDEBAR_ITEMS.iter().enumerate() {
        render_sidebar_button(frame, chunks[idx + 2], key, label, *view == active);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.label()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Contact send state is visible from every page
    let status = app.contact.status();
    if status.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} Sending", app.spinner()),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(message) = status.message() {
        let color = if matches!(status, SubmissionStatus::Succeeded) {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message, Style::default().fg(color)));
    }

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = if app.state.current_view.is_form_view() {
        " ^C:quit "
    } else {
        " q:quit "
    };

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    if app.state.lightbox.is_some() {
        return "←/→:browse  y:copy  Esc:close".to_string();
    }
    match app.state.current_view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => "j/k:select  Enter:open  d/u:scroll  y:copy link  g/w/c:go".to_string(),
        View::Works => "Tab/[]:filter  h/j/k/l:nav  Enter:open  Esc:back".to_string(),
        View::Project => "Tab:gallery/related  j/k:nav  Enter:open  Esc:back".to_string(),
        View::Contact => {
            let refine = if app.contact.can_refine() {
                format!("  {REFINE_SHORTCUT}:refine")
            } else {
                String::new()
            };
            format!("Tab:next  {SEND_SHORTCUT}:send{refine}  Esc:back")
        }
    }
}
