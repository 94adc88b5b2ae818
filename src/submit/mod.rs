//! Submission boundary: payload types and the placeholder client

mod client;
mod traits;

pub use client::{
    EnrollmentClient, EnrollmentSubmission, SubmissionReceipt, SubmitError, DEFAULT_SUBMIT_DELAY,
};
pub use traits::EnrollmentClientTrait;

#[cfg(test)]
pub use traits::MockEnrollmentClientTrait;
