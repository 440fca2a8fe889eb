//! Project detail page: description, gallery and related work

use super::widgets::{render_scrollable_list, truncate};
use crate::app::App;
use crate::state::catalog::{self, Project};
use crate::state::ProjectFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const HEADER_HEIGHT: u16 = 7;

fn section_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Draw the project page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Unknown ids are redirected on the next tick
    let Some(project) = app.state.current_project() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0], project);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let focus = app.state.project_focus;
    draw_gallery(
        frame,
        columns[0],
        project,
        (focus == ProjectFocus::Gallery).then_some(app.state.selected_index),
    );
    draw_related(
        frame,
        columns[1],
        &catalog::related_projects(project.id),
        (focus == ProjectFocus::Related).then_some(app.state.selected_index),
    );
}

fn draw_header(frame: &mut Frame, area: Rect, project: &Project) {
    let lines = vec![
        Line::from(Span::styled(
            project.category.label(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            project.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(project.description),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_gallery(frame: &mut Frame, area: Rect, project: &Project, selected: Option<usize>) {
    let title = format!("Gallery ({})", project.gallery.len());
    let block = section_block(&title, selected.is_some());
    let width = block.inner(area).width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = project
        .gallery
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", idx + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(truncate(image, width)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style());
    render_scrollable_list(frame, area, list, selected);
}

fn draw_related(frame: &mut Frame, area: Rect, related: &[&Project], selected: Option<usize>) {
    let block = section_block("More Work", selected.is_some());

    if related.is_empty() {
        let empty = Paragraph::new("Nothing related yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = block.inner(area).width as usize;
    let items: Vec<ListItem> = related
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(truncate(project.title, width)),
                Line::from(Span::styled(
                    truncate(project.category.label(), width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style());
    render_scrollable_list(frame, area, list, selected);
}
