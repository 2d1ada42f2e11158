//! HTTP handoff to the intake endpoint.
//!
//! [`IntakeClient`] sends a validated [`OnboardingRecord`] to the
//! externally owned intake URL as a JSON POST. Each call is a single
//! attempt; failures are returned to the caller, never retried.

use std::time::Duration;

use onboard_core::record::OnboardingRecord;

/// HTTP request timeout for a single submission.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why a submission did not reach a successful response.
///
/// The `Display` text is what the form shows in its error banner.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The request never completed (connection refused, DNS, timeout, ...).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("Error: {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// IntakeClient
// ---------------------------------------------------------------------------

/// Posts onboarding records to the intake endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IntakeClient {
    /// Build a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, IntakeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `record` as JSON and check the response status.
    ///
    /// The response body is ignored.
    pub async fn submit(&self, record: &OnboardingRecord) -> Result<(), IntakeError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting onboarding record");

        let response = self.client.post(&self.endpoint).json(record).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IntakeError::HttpStatus(status.as_u16()));
        }

        tracing::debug!(status = status.as_u16(), "Intake endpoint accepted record");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
