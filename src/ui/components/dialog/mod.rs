//! Dialog components for TUI

mod base;
mod error_dialog;
mod lightbox_dialog;

pub use error_dialog::render_error_dialog;
pub use lightbox_dialog::render_lightbox_dialog;
