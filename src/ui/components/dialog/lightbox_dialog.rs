//! Gallery lightbox overlay

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::platform::LINK_HINT;
use crate::state::{catalog, LightboxState};
use ratatui::{style::Color, Frame};

/// Render the lightbox for the image currently on display
pub fn render_lightbox_dialog(frame: &mut Frame, lightbox: &LightboxState) {
    let project_title = catalog::find_project(lightbox.project_id)
        .map(|p| p.title)
        .unwrap_or("Gallery");
    let title = format!("{project_title}  {}", lightbox.position_label());
    let message = format!("{}\n\n{LINK_HINT} the link to open it", lightbox.current());

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Magenta,
            border_color: Color::Magenta,
            message: &message,
            hint: Some(key_hint(&[
                ("←/→", "browse"),
                ("y", "copy link"),
                ("Esc", "close"),
            ])),
            max_width: 80,
        },
    );
}
