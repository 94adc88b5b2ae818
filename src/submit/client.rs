//! Placeholder submission client.
//!
//! The real backend contract is out of scope; this client defines the
//! request payload from the form's markup names, logs it, and resolves
//! after a short simulated delay so the loading state is observable.

use crate::state::{EnrollmentForm, FieldId, FieldValue, FileInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Default (placeholder) endpoint
const DEFAULT_ENDPOINT: &str = "https://enroll.invalid/api/applications";

/// Simulated round-trip time, matching the original's 2 s stand-in
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Submission failure taxonomy.
///
/// Transport and rejection both surface to the user as a modal dialog,
/// but the distinction is kept for logging and future retry policy.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// One-line user-facing message for the error dialog
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Transport(_) => {
                "An error occurred while submitting the form. Please try again.".to_string()
            }
            SubmitError::Rejected(reason) => {
                format!("The application was not accepted: {reason}")
            }
        }
    }
}

/// Request payload, keyed by the original markup field names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<FileInfo>,
    pub languages: Vec<String>,
    pub teams: Vec<String>,
    pub past_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_work_details: Option<String>,
}

impl EnrollmentSubmission {
    /// Collect the current form values into the wire payload
    pub fn from_form(form: &EnrollmentForm) -> Self {
        let text = |id: FieldId| form.field(id).as_text().trim().to_string();
        let optional_text = |id: FieldId| {
            let value = text(id);
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        };

        let past_work = match &form.field(FieldId::PastWork).value {
            FieldValue::Choice(c) => c.clone(),
            _ => None,
        };
        let profile_picture = match &form.field(FieldId::ProfilePicture).value {
            FieldValue::File(f) => f.clone(),
            _ => None,
        };

        Self {
            full_name: text(FieldId::FullName),
            email: text(FieldId::Email),
            phone: text(FieldId::Phone),
            date_of_birth: text(FieldId::DateOfBirth),
            portfolio: optional_text(FieldId::Portfolio),
            profile_picture,
            languages: form.field(FieldId::Languages).checked_options(),
            teams: form.field(FieldId::Teams).checked_options(),
            past_work,
            past_work_details: optional_text(FieldId::PastWorkDetails),
        }
    }
}

/// Confirmation returned on a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub confirmation_id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Client for the enrollment backend (placeholder implementation)
pub struct EnrollmentClient {
    endpoint: String,
    delay: Duration,
}

impl EnrollmentClient {
    /// Create a client pointed at the configured endpoint.
    /// `ENROLL_ENDPOINT` overrides the passed address.
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = std::env::var("ENROLL_ENDPOINT")
            .ok()
            .or(endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            endpoint,
            delay: DEFAULT_SUBMIT_DELAY,
        }
    }

    /// Override the simulated delay (used by config and tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Serialize and "send" the submission. Stand-in for a real call:
    /// waits out the simulated delay, then resolves with a receipt.
    pub async fn submit_enrollment(
        &self,
        submission: &EnrollmentSubmission,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let payload = serde_json::to_string(submission)
            .map_err(|e| SubmitError::Transport(format!("failed to encode payload: {e}")))?;
        tracing::info!(endpoint = %self.endpoint, %payload, "submitting enrollment");

        tokio::time::sleep(self.delay).await;

        let receipt = SubmissionReceipt {
            confirmation_id: Uuid::new_v4(),
            received_at: Utc::now(),
        };
        tracing::info!(confirmation_id = %receipt.confirmation_id, "enrollment accepted");
        Ok(receipt)
    }
}
