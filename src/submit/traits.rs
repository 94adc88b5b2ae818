//! Trait abstraction for the submission client to enable mocking in tests

use async_trait::async_trait;

use super::client::{EnrollmentClient, EnrollmentSubmission, SubmissionReceipt, SubmitError};

/// Trait for the submission boundary, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentClientTrait: Send + Sync {
    /// Send one enrollment submission to the backend
    async fn submit_enrollment(
        &self,
        submission: &EnrollmentSubmission,
    ) -> Result<SubmissionReceipt, SubmitError>;
}

#[async_trait]
impl EnrollmentClientTrait for EnrollmentClient {
    async fn submit_enrollment(
        &self,
        submission: &EnrollmentSubmission,
    ) -> Result<SubmissionReceipt, SubmitError> {
        EnrollmentClient::submit_enrollment(self, submission).await
    }
}
