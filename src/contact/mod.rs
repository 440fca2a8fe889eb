//! Contact form lifecycle: validation, delivery and message refinement

mod clock;
mod error;
mod refinement;
mod session;
mod submission;

pub use clock::{Clock, SystemClock};
pub use error::ContactError;
pub use refinement::RefinementController;
pub use session::{ContactSession, ContactView};
pub use submission::{ContactPayload, SubmissionController, SubmissionStatus};

#[cfg(test)]
pub use clock::ManualClock;
