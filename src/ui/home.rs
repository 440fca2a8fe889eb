//! Landing page: hero, selected works, services, about and contact links

use crate::app::App;
use crate::state::catalog::{
    self, ABOUT_TEXT, CTA_HEADLINE, CTA_TEXT, FOOTER_TEXT, HERO_HEADLINE, HERO_INTRO, SERVICES,
    SOCIAL_LINKS, STUDIO_NAME,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw the home page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            HERO_HEADLINE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(HERO_INTRO),
        Line::from(""),
        heading("Selected Works"),
    ];

    for (idx, project) in catalog::featured_projects().iter().enumerate() {
        let is_selected = idx == app.state.selected_index;
        let marker = if is_selected { "▸ " } else { "  " };
        let title_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(project.title, title_style),
            Span::styled(
                format!("  {}", project.category.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("What I Do"));
    for service in SERVICES {
        lines.push(Line::from(Span::styled(
            format!("• {}", service.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", service.description),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(heading("About"));
    lines.push(Line::from(ABOUT_TEXT));

    lines.push(Line::from(""));
    lines.push(heading(CTA_HEADLINE));
    lines.push(Line::from(CTA_TEXT));
    lines.push(Line::from(vec![
        Span::styled("c", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" start a project   "),
        Span::styled("y", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" copy {}", catalog::COLLABORATE_URL)),
    ]));

    lines.push(Line::from(""));
    for link in SOCIAL_LINKS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", link.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(link.url, Style::default().fg(Color::Blue)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        FOOTER_TEXT,
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!(" {STUDIO_NAME} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, area);
}
