//! Works gallery: category filter bar and project grid

use super::widgets::truncate;
use crate::app::App;
use crate::state::{CategoryFilter, Project};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 5; // 1 (top border) + 3 (content) + 1 (bottom border)
const CARD_SPACING_H: u16 = 1;
const FILTER_BAR_HEIGHT: u16 = 2;

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Spread `columns` cards evenly across the inner width
    fn new(inner_width: u16, columns: usize) -> Self {
        let columns = columns.max(1);
        let total_spacing = (columns as u16 - 1) * CARD_SPACING_H;
        let card_width = inner_width.saturating_sub(total_spacing) / columns as u16;
        Self {
            columns,
            card_width,
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get card area for a visible row and column
    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        Rect {
            x: inner.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: inner.y + (row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }

    /// First row to draw so the selected card stays visible
    fn first_row(&self, selected: usize, visible_rows: usize) -> usize {
        let (row, _) = self.index_to_pos(selected);
        row.saturating_sub(visible_rows.saturating_sub(1))
    }
}

/// Draw the works page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Works ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height <= FILTER_BAR_HEIGHT {
        return;
    }

    draw_filter_bar(
        frame,
        Rect {
            height: 1,
            ..inner
        },
        app.state.active_category,
    );

    let grid_area = Rect {
        y: inner.y + FILTER_BAR_HEIGHT,
        height: inner.height - FILTER_BAR_HEIGHT,
        ..inner
    };

    let projects = app.state.visible_projects();
    if projects.is_empty() {
        let message = Paragraph::new("No projects in this category yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(message, grid_area);
        return;
    }

    let grid = GridLayout::new(grid_area.width, app.calculate_grid_columns());
    let visible_rows = (grid_area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = grid.first_row(app.state.selected_index, visible_rows);

    for (idx, project) in projects.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let card_area = grid.card_area(grid_area, row - first_row, col);
        if card_area.y + card_area.height > grid_area.y + grid_area.height {
            continue;
        }
        draw_project_card(frame, card_area, project, idx == app.state.selected_index);
    }
}

/// Draw the category tabs
fn draw_filter_bar(frame: &mut Frame, area: Rect, active: CategoryFilter) {
    let mut spans = Vec::new();
    for filter in CategoryFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw a single project card
fn draw_project_card(frame: &mut Frame, area: Rect, project: &Project, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let title_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let featured = if project.featured { "★ " } else { "" };

    let content = vec![
        Line::from(vec![
            Span::styled(featured, Style::default().fg(Color::Yellow)),
            Span::styled(
                truncate(project.title, width.saturating_sub(featured.chars().count())),
                title_style,
            ),
        ]),
        Line::from(Span::styled(
            truncate(project.category.label(), width),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            truncate(project.image, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content), inner);
}
