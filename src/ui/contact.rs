//! Contact page: form fields, refine and send buttons, submission status

use super::components::{render_button, ButtonTone, BUTTON_HEIGHT};
use super::forms::draw_field;
use crate::app::App;
use crate::contact::{ContactView, SubmissionStatus};
use crate::platform::{LINK_HINT, REFINE_SHORTCUT, SEND_SHORTCUT};
use crate::state::catalog::COLLABORATE_URL;
use crate::state::ContactField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const HEADER_HEIGHT: u16 = 3;
const FIELD_HEIGHT: u16 = 3;
const MESSAGE_MIN_HEIGHT: u16 = 5;

/// Submit button text for a status
fn submit_label(status: &SubmissionStatus, spinner: &str) -> String {
    match status {
        SubmissionStatus::Idle => "Send Message".to_string(),
        SubmissionStatus::Submitting => format!("{spinner} Sending"),
        SubmissionStatus::Succeeded => "✓ Sent".to_string(),
        SubmissionStatus::Failed(_) => "Try Again".to_string(),
    }
}

fn submit_tone(status: &SubmissionStatus) -> ButtonTone {
    match status {
        SubmissionStatus::Idle => ButtonTone::Selected,
        SubmissionStatus::Submitting => ButtonTone::Disabled,
        SubmissionStatus::Succeeded => ButtonTone::Success,
        SubmissionStatus::Failed(_) => ButtonTone::Danger,
    }
}

/// Refine button text
fn refine_label(is_refining: bool, spinner: &str) -> String {
    if is_refining {
        format!("{spinner} Refining")
    } else {
        format!("✦ Refine with AI ({REFINE_SHORTCUT})")
    }
}

/// Draw the contact page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Start a Project ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(MESSAGE_MIN_HEIGHT),
            Constraint::Length(1), // inline error
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // status message
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let view = app.contact.view();
    let form = app.contact.form();

    draw_header(frame, chunks[0]);

    for (idx, field) in ContactField::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            form.field(field),
            view.value(field),
            field == view.focused,
        );
    }

    draw_inline_error(frame, chunks[4], &view);
    draw_buttons(frame, chunks[5], app, &view);
    draw_status(frame, chunks[6], &view);

    let hints = Paragraph::new(format!(
        "Tab: next field  {SEND_SHORTCUT}: send  {REFINE_SHORTCUT}: refine  Esc: back"
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[7]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Have a project in mind? Tell me about it.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "Prefer chatting? ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(COLLABORATE_URL, Style::default().fg(Color::Blue)),
            Span::styled(
                format!(" ({LINK_HINT})"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn draw_inline_error(frame: &mut Frame, area: Rect, view: &ContactView) {
    // Validation errors take precedence over a failed refinement
    let Some(message) = view.form_error.or(view.refine_error) else {
        return;
    };
    let error = Paragraph::new(Span::styled(
        format!("✗ {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(error, area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, view: &ContactView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Percentage(50),
        ])
        .split(area);

    let refine_tone = if view.is_refining || !app.contact.can_refine() {
        ButtonTone::Disabled
    } else {
        ButtonTone::Normal
    };
    render_button(
        frame,
        columns[0],
        &refine_label(view.is_refining, app.spinner()),
        refine_tone,
    );

    render_button(
        frame,
        columns[2],
        &submit_label(view.status, app.spinner()),
        submit_tone(view.status),
    );
}

fn draw_status(frame: &mut Frame, area: Rect, view: &ContactView) {
    let Some(message) = view.status_message else {
        return;
    };
    let color = if matches!(view.status, SubmissionStatus::Succeeded) {
        Color::Green
    } else {
        Color::Red
    };
    let status = Paragraph::new(Span::styled(message, Style::default().fg(color)))
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}
