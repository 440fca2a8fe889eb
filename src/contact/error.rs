//! Local validation errors for the contact flow.
//!
//! The `Display` text of each variant is shown to the user as-is.

use crate::state::ContactField;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your idea first.")]
    EmptyMessage,

    #[error("Please fill in your {0}.")]
    MissingField(ContactField),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ContactError::EmptyMessage.to_string(),
            "Please enter your idea first."
        );
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "Please fill in your email."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }
}
