//! Application state definitions

use super::catalog::{self, CategoryFilter, Project};
use super::LightboxState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Intro animation
    Splash,
    #[default]
    Home,
    Works,
    Project,
    Contact,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Splash => "Intro",
            Self::Home => "Home",
            Self::Works => "Works",
            Self::Project => "Project",
            Self::Contact => "Contact",
        }
    }

    /// Views that capture typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewParams {
    pub project_id: Option<u32>,
}

impl ViewParams {
    pub fn project(id: u32) -> Self {
        Self {
            project_id: Some(id),
        }
    }
}

/// Focus on the project page (gallery vs related list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFocus {
    #[default]
    Gallery,
    Related,
}

impl ProjectFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Gallery => Self::Related,
            Self::Related => Self::Gallery,
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Selection
    pub selected_index: usize,
    pub active_category: CategoryFilter,
    pub project_focus: ProjectFocus,

    // UI state
    pub scroll_offset: usize,
    pub lightbox: Option<LightboxState>,
    error_queue: Vec<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection left in grid
    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index % columns > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection right in grid
    pub fn move_selection_right(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Move selection up in grid (by one row)
    pub fn move_selection_up_grid(&mut self, columns: usize) {
        if columns > 0 && self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Move selection down in grid (by one row), landing on the last card
    /// when the row below is short
    pub fn move_selection_down_grid(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        } else if self.selected_index / columns < (total - 1) / columns {
            self.selected_index = total - 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Change the works filter. Selection always returns to the first card.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.active_category = filter;
        self.reset_selection();
    }

    pub fn next_category(&mut self) {
        self.set_category(self.active_category.next());
    }

    pub fn prev_category(&mut self) {
        self.set_category(self.active_category.prev());
    }

    /// Projects visible under the active filter
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        catalog::filter_projects(self.active_category)
    }

    /// Project addressed by the current view params
    pub fn current_project(&self) -> Option<&'static Project> {
        self.view_params.project_id.and_then(catalog::find_project)
    }

    /// Open the lightbox on an image of the current project
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        let Some(project) = self.current_project() else {
            return false;
        };
        self.lightbox = LightboxState::open(project.id, project.gallery, index);
        self.lightbox.is_some()
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_queue.len()
    }

    /// Oldest undismissed error
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Category;

    mod grid_selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_right_stops_at_row_end() {
            let mut state = AppState::default();
            state.move_selection_right(2, 5);
            state.move_selection_right(2, 5);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_left_stops_at_row_start() {
            let mut state = AppState {
                selected_index: 2,
                ..Default::default()
            };
            state.move_selection_left(2);
            assert_eq!(state.selected_index, 2);
        }

        #[test]
        fn test_down_lands_on_last_card_of_short_row() {
            // 3 columns, 5 cards: index 2 has no card below it
            let mut state = AppState {
                selected_index: 2,
                ..Default::default()
            };
            state.move_selection_down_grid(3, 5);
            assert_eq!(state.selected_index, 4);
        }

        #[test]
        fn test_down_on_last_row_is_noop() {
            let mut state = AppState {
                selected_index: 4,
                ..Default::default()
            };
            state.move_selection_down_grid(3, 5);
            assert_eq!(state.selected_index, 4);
        }

        #[test]
        fn test_up_moves_one_row() {
            let mut state = AppState {
                selected_index: 4,
                ..Default::default()
            };
            state.move_selection_up_grid(3);
            assert_eq!(state.selected_index, 1);
            state.move_selection_up_grid(3);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_list_selection_is_bounded() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            for _ in 0..5 {
                state.move_selection_down(3);
            }
            assert_eq!(state.selected_index, 2);
        }
    }

    mod categories {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_changing_filter_resets_selection() {
            let mut state = AppState {
                selected_index: 3,
                scroll_offset: 4,
                ..Default::default()
            };

            state.next_category();

            assert_eq!(
                state.active_category,
                CategoryFilter::Only(Category::Branding)
            );
            assert_eq!(state.selected_index, 0);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_visible_projects_follow_filter() {
            let mut state = AppState::default();
            assert_eq!(state.visible_projects().len(), catalog::PROJECTS.len());

            state.set_category(CategoryFilter::Only(Category::Packaging));

            assert!(state
                .visible_projects()
                .iter()
                .all(|p| p.category == Category::Packaging));
        }
    }

    mod lightbox {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_open_requires_current_project() {
            let mut state = AppState::default();
            assert!(!state.open_lightbox(0));
            assert!(state.lightbox.is_none());
        }

        #[test]
        fn test_open_and_close() {
            let mut state = AppState {
                view_params: ViewParams::project(1),
                ..Default::default()
            };

            assert!(state.open_lightbox(1));
            let lightbox = state.lightbox.as_ref().unwrap();
            assert_eq!(lightbox.project_id, 1);
            assert_eq!(lightbox.position_label(), "2 / 3");

            state.close_lightbox();
            assert!(state.lightbox.is_none());
        }

        #[test]
        fn test_unknown_project_has_no_current() {
            let state = AppState {
                view_params: ViewParams::project(999),
                ..Default::default()
            };
            assert!(state.current_project().is_none());
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_dismiss_in_order() {
            let mut state = AppState::default();
            assert!(!state.has_errors());

            state.push_error("first".to_string());
            state.push_error("second".to_string());

            assert_eq!(state.error_count(), 2);
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
            state.dismiss_error();
        }
    }
}
