//! The contact session: form state, both controllers and their in-flight work
//!
//! Outbound calls run in spawned tasks and report back over a channel. All
//! state changes happen in [`ContactSession::poll`], called once per UI tick.

use super::{
    Clock, ContactError, RefinementController, SubmissionController, SubmissionStatus,
};
use crate::services::{DeliveryReceipt, EmailSender, TextGenerator};
use crate::state::{ContactField, ContactForm, Form};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Completion of a spawned outbound call
#[derive(Debug)]
enum ContactEvent {
    Delivered(Result<DeliveryReceipt>),
    Refined(Result<String>),
}

/// Read-only projection rendered by the contact view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub status: &'a SubmissionStatus,
    pub status_message: Option<&'static str>,
    pub is_refining: bool,
    pub refine_error: Option<&'a str>,
    pub form_error: Option<&'a str>,
    pub focused: ContactField,
}

impl<'a> ContactView<'a> {
    /// Current text of one field
    pub fn value(&self, field: ContactField) -> &'a str {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }
}

pub struct ContactSession {
    form: ContactForm,
    submission: SubmissionController,
    refinement: RefinementController,
    form_error: Option<String>,
    email: Arc<dyn EmailSender>,
    generator: Arc<dyn TextGenerator>,
    clock: Arc<dyn Clock>,
    events_tx: UnboundedSender<ContactEvent>,
    events_rx: UnboundedReceiver<ContactEvent>,
    in_flight: Vec<JoinHandle<()>>,
}

impl ContactSession {
    pub fn new(
        email: Arc<dyn EmailSender>,
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            form: ContactForm::new(),
            submission: SubmissionController::new(),
            refinement: RefinementController::new(),
            form_error: None,
            email,
            generator,
            clock,
            events_tx,
            events_rx,
            in_flight: Vec::new(),
        }
    }

    pub fn view(&self) -> ContactView<'_> {
        ContactView {
            name: self.form.name.as_text(),
            email: self.form.email.as_text(),
            message: self.form.message.as_text(),
            status: self.submission.status(),
            status_message: self.submission.status().message(),
            is_refining: self.refinement.is_refining(),
            refine_error: self.refinement.error(),
            form_error: self.form_error.as_deref(),
            focused: self.form.focused(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.submission.status()
    }

    /// Whether the refine trigger is enabled. Whitespace still enables it so
    /// validation can report the empty idea.
    pub fn can_refine(&self) -> bool {
        !self.refinement.is_refining() && !self.form.message.as_text().is_empty()
    }

    /// Whether work is pending that the UI should poll for promptly
    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty() || self.submission.reset_deadline().is_some()
    }

    pub fn focus_next(&mut self) {
        self.form.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.form.prev_field();
    }

    /// Replace a field's value. Clears any inline validation message.
    pub fn update_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        self.form_error = None;
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        let field = self.form.focused();
        let mut value = self.form.field(field).as_text().to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character of the focused field
    pub fn delete_char(&mut self) {
        let field = self.form.focused();
        let mut value = self.form.field(field).as_text().to_string();
        if value.pop().is_some() {
            self.update_field(field, value);
        }
    }

    /// Validate and send the form. Returns true when a send was started.
    pub fn submit(&mut self) -> bool {
        let sent_at = self.clock.wall_time();
        let payload = match self.submission.begin(&self.form, sent_at) {
            Ok(Some(payload)) => payload,
            Ok(None) => return false,
            Err(err) => {
                self.reject(err);
                return false;
            }
        };
        self.form_error = None;

        let sender = Arc::clone(&self.email);
        let events = self.events_tx.clone();
        self.in_flight.push(tokio::spawn(async move {
            let outcome = sender.send(&payload).await;
            let _ = events.send(ContactEvent::Delivered(outcome));
        }));
        true
    }

    /// Ask the text generator to rewrite the message. Returns true when a
    /// request was started.
    pub fn refine(&mut self) -> bool {
        if self.refinement.is_refining() {
            return false;
        }
        let prompt = match self.refinement.begin(&self.form) {
            Ok(prompt) => prompt,
            Err(_) => return false,
        };

        let generator = Arc::clone(&self.generator);
        let events = self.events_tx.clone();
        self.in_flight.push(tokio::spawn(async move {
            let outcome = generator.generate(&prompt).await;
            let _ = events.send(ContactEvent::Refined(outcome));
        }));
        true
    }

    /// Apply finished work and expire the reset deadline. Returns true when
    /// anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            changed = true;
        }
        if self.submission.tick(self.clock.now()) {
            tracing::debug!("Submission status reset to idle");
            changed = true;
        }
        self.in_flight.retain(|handle| !handle.is_finished());
        changed
    }

    /// Abort in-flight calls and drop the reset deadline
    pub fn teardown(&mut self) {
        if !self.in_flight.is_empty() {
            tracing::debug!(tasks = self.in_flight.len(), "Aborting in-flight contact work");
        }
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        self.submission.release();
    }

    /// Wait for the next completion and apply it
    #[cfg(test)]
    async fn settle(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: ContactEvent) {
        match event {
            ContactEvent::Delivered(outcome) => {
                self.submission
                    .complete(outcome, &mut self.form, self.clock.now());
            }
            ContactEvent::Refined(outcome) => {
                self.refinement.complete(outcome, &mut self.form);
            }
        }
    }

    fn reject(&mut self, err: ContactError) {
        tracing::debug!("Submission rejected: {err}");
        if let ContactError::MissingField(field) = err {
            self.form.focus(field);
        }
        self.form_error = Some(err.to_string());
    }
}

impl Drop for ContactSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::clock::ManualClock;
    use crate::contact::refinement::REFINE_FAILED_MESSAGE;
    use crate::contact::submission::{FAILED_MESSAGE, RESET_DELAY, SENT_MESSAGE};
    use crate::services::{MockEmailSender, MockTextGenerator};
    use anyhow::anyhow;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 11, 5, 0).unwrap(),
        ))
    }

    fn session(
        email: MockEmailSender,
        generator: MockTextGenerator,
        clock: Arc<ManualClock>,
    ) -> ContactSession {
        ContactSession::new(Arc::new(email), Arc::new(generator), clock)
    }

    fn fill(session: &mut ContactSession) {
        session.update_field(ContactField::Name, "Amina".to_string());
        session.update_field(ContactField::Email, "amina@example.co.ke".to_string());
        session.update_field(ContactField::Message, "make a logo".to_string());
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_last_write_wins() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());

            for value in ["A", "Am", "", "Amina W."] {
                session.update_field(ContactField::Name, value.to_string());
            }

            assert_eq!(session.view().name, "Amina W.");
        }

        #[test]
        fn test_view_value_per_field() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());
            session.update_field(ContactField::Email, "amina@example.co.ke".to_string());
            session.update_field(ContactField::Message, "make a logo".to_string());

            let view = session.view();
            assert_eq!(view.value(ContactField::Name), "");
            assert_eq!(view.value(ContactField::Email), "amina@example.co.ke");
            assert_eq!(view.value(ContactField::Message), "make a logo");
        }

        #[test]
        fn test_typing_edits_focused_field() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());
            session.focus_next();

            for c in "a@b.co".chars() {
                session.insert_char(c);
            }
            session.delete_char();

            assert_eq!(session.view().email, "a@b.c");
            assert_eq!(session.view().name, "");
        }

        #[test]
        fn test_focus_cycles() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());

            session.focus_prev();
            assert_eq!(session.view().focused, ContactField::Message);
            session.focus_next();
            assert_eq!(session.view().focused, ContactField::Name);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_clears_form_then_resets() {
            let clock = clock();
            let mut email = MockEmailSender::new();
            email
                .expect_send()
                .withf(|payload| {
                    payload.name == "Amina"
                        && payload.message == "make a logo"
                        && payload.time == "Monday, 19 October 2026 at 14:05"
                })
                .times(1)
                .returning(|_| Ok(DeliveryReceipt::new("OK")));
            let mut session = session(email, MockTextGenerator::new(), clock.clone());
            fill(&mut session);

            assert!(session.submit());
            assert_eq!(session.status(), &SubmissionStatus::Submitting);

            session.settle().await;
            let view = session.view();
            assert_eq!(view.status, &SubmissionStatus::Succeeded);
            assert_eq!(view.status_message, Some(SENT_MESSAGE));
            assert_eq!((view.name, view.email, view.message), ("", "", ""));

            clock.advance(RESET_DELAY - Duration::from_millis(1));
            session.poll();
            assert_eq!(session.status(), &SubmissionStatus::Succeeded);

            clock.advance(Duration::from_millis(1));
            assert!(session.poll());
            assert_eq!(session.status(), &SubmissionStatus::Idle);
            assert_eq!(session.view().status_message, None);
        }

        #[tokio::test]
        async fn test_failure_keeps_form_then_resets() {
            let clock = clock();
            let mut email = MockEmailSender::new();
            email
                .expect_send()
                .times(1)
                .returning(|_| Err(anyhow!("Email service rejected the message (400)")));
            let mut session = session(email, MockTextGenerator::new(), clock.clone());
            fill(&mut session);

            assert!(session.submit());
            session.settle().await;

            let view = session.view();
            assert!(matches!(view.status, SubmissionStatus::Failed(_)));
            assert_eq!(view.status_message, Some(FAILED_MESSAGE));
            assert_eq!(view.name, "Amina");
            assert_eq!(view.message, "make a logo");

            clock.advance(RESET_DELAY);
            session.poll();
            assert_eq!(session.status(), &SubmissionStatus::Idle);
            assert_eq!(session.view().message, "make a logo");
        }

        #[tokio::test]
        async fn test_second_submit_while_submitting_is_dropped() {
            let mut email = MockEmailSender::new();
            email
                .expect_send()
                .times(1)
                .returning(|_| Ok(DeliveryReceipt::new("OK")));
            let mut session = session(email, MockTextGenerator::new(), clock());
            fill(&mut session);

            assert!(session.submit());
            assert!(!session.submit());
            assert_eq!(session.status(), &SubmissionStatus::Submitting);

            session.settle().await;
            assert_eq!(session.status(), &SubmissionStatus::Succeeded);
        }

        #[tokio::test]
        async fn test_submit_during_reset_window_is_dropped() {
            let clock = clock();
            let mut email = MockEmailSender::new();
            email
                .expect_send()
                .times(1)
                .returning(|_| Err(anyhow!("timed out")));
            let mut session = session(email, MockTextGenerator::new(), clock.clone());
            fill(&mut session);

            session.submit();
            session.settle().await;

            assert!(!session.submit());
            assert!(matches!(session.status(), SubmissionStatus::Failed(_)));
        }

        #[tokio::test]
        async fn test_missing_field_issues_no_call() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());
            session.update_field(ContactField::Name, "Amina".to_string());
            session.update_field(ContactField::Message, "make a logo".to_string());

            assert!(!session.submit());

            let view = session.view();
            assert_eq!(view.status, &SubmissionStatus::Idle);
            assert_eq!(view.form_error, Some("Please fill in your email."));
            assert_eq!(view.focused, ContactField::Email);
            assert!(!session.is_busy());
        }

        #[tokio::test]
        async fn test_invalid_email_issues_no_call() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());
            fill(&mut session);
            session.update_field(ContactField::Email, "amina.example".to_string());

            assert!(!session.submit());
            assert_eq!(
                session.view().form_error,
                Some("Please enter a valid email address.")
            );
            assert_eq!(session.status(), &SubmissionStatus::Idle);
        }

        #[tokio::test]
        async fn test_next_edit_clears_inline_error() {
            let mut session = session(MockEmailSender::new(), MockTextGenerator::new(), clock());
            session.submit();
            assert!(session.view().form_error.is_some());

            session.insert_char('A');

            assert_eq!(session.view().form_error, None);
        }
    }

    mod refinement {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_blank_message_issues_no_call() {
            for message in ["", "   "] {
                let mut session =
                    session(MockEmailSender::new(), MockTextGenerator::new(), clock());
                session.update_field(ContactField::Message, message.to_string());

                assert!(!session.refine());

                let view = session.view();
                assert!(!view.is_refining);
                assert_eq!(view.refine_error, Some("Please enter your idea first."));
                assert_eq!(session.can_refine(), !message.is_empty());
            }
        }

        #[tokio::test]
        async fn test_success_sets_message_exactly() {
            let mut generator = MockTextGenerator::new();
            generator
                .expect_generate()
                .withf(|prompt| prompt.ends_with("Client's message: \"make a logo\""))
                .times(1)
                .returning(|_| Ok("I would like a professional logo design.".to_string()));
            let mut session = session(MockEmailSender::new(), generator, clock());
            session.update_field(ContactField::Message, "make a logo".to_string());

            assert!(session.refine());
            assert!(session.view().is_refining);
            assert!(!session.can_refine());
            assert!(!session.refine());

            session.settle().await;

            let view = session.view();
            assert_eq!(view.message, "I would like a professional logo design.");
            assert!(!view.is_refining);
            assert_eq!(view.refine_error, None);
        }

        #[tokio::test]
        async fn test_empty_response_keeps_message() {
            let mut generator = MockTextGenerator::new();
            generator
                .expect_generate()
                .times(1)
                .returning(|_| Ok(String::new()));
            let mut session = session(MockEmailSender::new(), generator, clock());
            session.update_field(ContactField::Message, "make a logo".to_string());

            session.refine();
            session.settle().await;

            let view = session.view();
            assert_eq!(view.message, "make a logo");
            assert_eq!(view.refine_error, Some(REFINE_FAILED_MESSAGE));
            assert!(!view.is_refining);
        }

        #[tokio::test]
        async fn test_overlap_with_submission_keeps_snapshot() {
            let mut email = MockEmailSender::new();
            email
                .expect_send()
                .withf(|payload| payload.message == "make a logo")
                .times(1)
                .returning(|_| Ok(DeliveryReceipt::new("OK")));
            let mut generator = MockTextGenerator::new();
            generator
                .expect_generate()
                .times(1)
                .returning(|_| Ok("A structured brief.".to_string()));
            let mut session = session(email, generator, clock());
            fill(&mut session);

            assert!(session.refine());
            assert!(session.submit());

            session.settle().await;
            session.settle().await;

            assert_eq!(session.status(), &SubmissionStatus::Succeeded);
            assert!(!session.view().is_refining);
        }
    }

    mod teardown {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_aborts_in_flight_work() {
            let mut email = MockEmailSender::new();
            email.expect_send().never();
            let mut session = session(email, MockTextGenerator::new(), clock());
            fill(&mut session);

            assert!(session.submit());
            assert!(session.is_busy());

            session.teardown();
            tokio::task::yield_now().await;

            assert!(!session.poll());
            assert!(!session.is_busy());
            assert_eq!(session.status(), &SubmissionStatus::Submitting);
        }

        #[tokio::test]
        async fn test_releases_reset_deadline() {
            let clock = clock();
            let mut email = MockEmailSender::new();
            email
                .expect_send()
                .times(1)
                .returning(|_| Ok(DeliveryReceipt::new("OK")));
            let mut session = session(email, MockTextGenerator::new(), clock.clone());
            fill(&mut session);
            session.submit();
            session.settle().await;
            session.poll();
            assert!(session.is_busy());

            session.teardown();
            clock.advance(RESET_DELAY * 2);

            assert!(!session.poll());
            assert!(!session.is_busy());
            assert_eq!(session.status(), &SubmissionStatus::Succeeded);
        }
    }
}
