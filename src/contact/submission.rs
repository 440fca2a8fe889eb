//! Submission lifecycle: Idle -> Submitting -> Succeeded | Failed -> Idle

use super::clock::format_timestamp;
use super::ContactError;
use crate::services::DeliveryReceipt;
use crate::state::ContactForm;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};

/// How long a terminal status stays visible before the form returns to idle
pub const RESET_DELAY: Duration = Duration::from_secs(3);

pub const SENT_MESSAGE: &str = "Message Sent! Thank you.";
pub const FAILED_MESSAGE: &str = "Failed to send. Please try again.";

/// Template parameters handed to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub time: String,
}

impl ContactPayload {
    /// Snapshot the form at the moment a send begins
    pub fn from_form(form: &ContactForm, sent_at: DateTime<Utc>) -> Self {
        Self {
            name: form.name.as_text().to_string(),
            email: form.email.as_text().to_string(),
            message: form.message.as_text().to_string(),
            time: format_timestamp(sent_at),
        }
    }
}

/// Status of the most recent submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the logged cause; the user only ever sees [`FAILED_MESSAGE`]
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// User-visible status line
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Succeeded => Some(SENT_MESSAGE),
            Self::Failed(_) => Some(FAILED_MESSAGE),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "success",
            Self::Failed(_) => "error",
        }
    }
}

/// Owns the submission status and its auto-reset deadline
#[derive(Debug, Default)]
pub struct SubmissionController {
    status: SubmissionStatus,
    reset_at: Option<Instant>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Try to move from idle to submitting.
    ///
    /// Returns `Ok(None)` when a submission is already in progress or its
    /// outcome is still on display; the request is dropped, not queued.
    pub fn begin(
        &mut self,
        form: &ContactForm,
        sent_at: DateTime<Utc>,
    ) -> Result<Option<ContactPayload>, ContactError> {
        if !self.status.is_idle() {
            tracing::debug!(status = self.status.label(), "Ignoring submit while busy");
            return Ok(None);
        }

        form.validate()?;

        let payload = ContactPayload::from_form(form, sent_at);
        self.status = SubmissionStatus::Submitting;
        tracing::info!(time = %payload.time, "Submitting contact message");
        Ok(Some(payload))
    }

    /// Apply the delivery outcome and arm the reset deadline
    pub fn complete(
        &mut self,
        outcome: Result<DeliveryReceipt>,
        form: &mut ContactForm,
        now: Instant,
    ) {
        if !self.status.is_submitting() {
            tracing::debug!(
                status = self.status.label(),
                "Dropping delivery outcome with no submission in flight"
            );
            return;
        }

        match outcome {
            Ok(receipt) => {
                tracing::info!(receipt = %receipt, "Contact message delivered");
                form.clear();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(err) => {
                tracing::warn!("Contact message delivery failed: {err:#}");
                self.status = SubmissionStatus::Failed(format!("{err:#}"));
            }
        }
        self.reset_at = Some(now + RESET_DELAY);
    }

    /// Return to idle once the deadline has passed. Returns true on transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.reset_at = None;
                self.status = SubmissionStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending deadline
    pub fn release(&mut self) {
        self.reset_at = None;
    }
}
