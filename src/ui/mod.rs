//! UI module for rendering the TUI

mod components;
mod contact;
mod forms;
mod home;
mod layout;
mod project;
mod splash;
mod widgets;
mod works;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_lightbox_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.in_splash() {
        let main_area = layout::create_layout_no_sidebar(area);
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, main_area, splash_state);
        }
        return;
    }

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Splash => {}
        View::Home => home::draw(frame, main_area, app),
        View::Works => works::draw(frame, main_area, app),
        View::Project => project::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    if let Some(lightbox) = &app.state.lightbox {
        render_lightbox_dialog(frame, lightbox);
    }

    // Errors sit above everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_count());
    }
}
