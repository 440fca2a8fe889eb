//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_sidebar_button, ButtonTone, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_lightbox_dialog};
