//! Form domain layer

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{ContactField, ContactForm, Form};
