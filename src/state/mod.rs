//! Application state module

mod app_state;
pub mod catalog;
mod forms;
mod lightbox;
mod splash_state;

pub use app_state::*;
pub use catalog::{CategoryFilter, Project};
pub use forms::*;
pub use lightbox::*;
pub use splash_state::*;
