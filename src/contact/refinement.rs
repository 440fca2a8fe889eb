//! AI-assisted rewrite of the contact message

use super::ContactError;
use crate::state::{ContactField, ContactForm};
use anyhow::Result;

pub const REFINE_FAILED_MESSAGE: &str = "Couldn't refine the idea right now. Please try again.";

/// Wrap the client's raw message in the rewrite instructions
pub fn build_prompt(message: &str) -> String {
    format!(
        "You are a helpful creative assistant for a design agency. A potential client has \
written a project idea. Your task is to refine this idea into a slightly more structured and \
professional-sounding message. Do not add any conversational text, preambles, or markdown \
formatting. Just output the refined message directly, ready to be sent. Client's message: \
\"{message}\""
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RefinementState {
    #[default]
    Idle,
    Refining,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct RefinementController {
    state: RefinementState,
}

impl RefinementController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_refining(&self) -> bool {
        matches!(self.state, RefinementState::Refining)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RefinementState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Validate the message and start refining. Returns the prompt to send.
    ///
    /// Does not guard against a refinement already running; callers disable
    /// the trigger while [`Self::is_refining`] is true.
    pub fn begin(&mut self, form: &ContactForm) -> Result<String, ContactError> {
        let message = form.message.as_text();
        if message.trim().is_empty() {
            let err = ContactError::EmptyMessage;
            self.state = RefinementState::Failed(err.to_string());
            return Err(err);
        }

        self.state = RefinementState::Refining;
        tracing::info!(chars = message.chars().count(), "Refining contact message");
        Ok(build_prompt(message))
    }

    /// Apply the generated text, or record a failure and leave the message alone
    pub fn complete(&mut self, outcome: Result<String>, form: &mut ContactForm) {
        match outcome {
            Ok(text) if !text.trim().is_empty() => {
                form.set(ContactField::Message, text);
                self.state = RefinementState::Idle;
            }
            Ok(_) => {
                tracing::warn!("Refinement returned an empty response");
                self.state = RefinementState::Failed(REFINE_FAILED_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!("Refinement failed: {err:#}");
                self.state = RefinementState::Failed(REFINE_FAILED_MESSAGE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn form_with_message(message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Message, message.to_string());
        form
    }

    #[test]
    fn test_prompt_wraps_message() {
        let prompt = build_prompt("make a logo");
        assert!(prompt.ends_with("Client's message: \"make a logo\""));
        assert!(prompt.contains("Do not add any conversational text"));
    }

    #[test]
    fn test_empty_message_fails_locally() {
        for message in ["", "   ", "\n\t"] {
            let mut controller = RefinementController::new();
            let result = controller.begin(&form_with_message(message));

            assert_eq!(result, Err(ContactError::EmptyMessage));
            assert!(!controller.is_refining());
            assert_eq!(controller.error(), Some("Please enter your idea first."));
        }
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut controller = RefinementController::new();
        let _ = controller.begin(&form_with_message(""));

        let prompt = tokio_test::assert_ok!(controller.begin(&form_with_message("make a logo")));

        assert!(controller.is_refining());
        assert!(controller.error().is_none());
        assert!(prompt.contains("make a logo"));
    }

    #[test]
    fn test_success_overwrites_message_exactly() {
        let mut controller = RefinementController::new();
        let mut form = form_with_message("make a logo");
        controller.begin(&form).unwrap();

        controller.complete(
            Ok("I would like a professional logo design.".to_string()),
            &mut form,
        );

        assert_eq!(
            form.message.as_text(),
            "I would like a professional logo design."
        );
        assert!(!controller.is_refining());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_empty_response_is_failure() {
        for response in ["", "  \n"] {
            let mut controller = RefinementController::new();
            let mut form = form_with_message("make a logo");
            controller.begin(&form).unwrap();

            controller.complete(Ok(response.to_string()), &mut form);

            assert_eq!(form.message.as_text(), "make a logo");
            assert_eq!(controller.error(), Some(REFINE_FAILED_MESSAGE));
            assert!(!controller.is_refining());
        }
    }

    #[test]
    fn test_service_error_keeps_message() {
        let mut controller = RefinementController::new();
        let mut form = form_with_message("make a logo");
        controller.begin(&form).unwrap();

        controller.complete(Err(anyhow!("quota exceeded")), &mut form);

        assert_eq!(form.message.as_text(), "make a logo");
        assert_eq!(controller.error(), Some(REFINE_FAILED_MESSAGE));
    }
}
