//! Form controller: draft state, submit orchestration, and the banner /
//! busy / readout state a page renders from.
//!
//! ```text
//! idle -> validating -> invalid -> idle
//!                    -> submitting -> succeeded -> idle
//!                                  -> failed    -> idle
//! ```
//!
//! [`FormController::submit`] borrows the controller mutably for the whole
//! attempt, so a second submit cannot start while one is in flight.

use chrono::NaiveDate;

use onboard_core::record::{DraftRecord, OnboardingRecord};
use onboard_core::services::ServiceKind;
use onboard_core::validation::{self, Field, FieldErrors};

use crate::client::{IntakeClient, IntakeError};

/// Banner text when a network failure carries no message of its own.
pub const NETWORK_ERROR_FALLBACK: &str = "Network error";

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMIT_LABEL_BUSY: &str = "Submitting...";

// ---------------------------------------------------------------------------
// State types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// The message shown above the form after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Success(msg) | Banner::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation; nothing was sent.
    Invalid(FieldErrors),
    /// The endpoint answered 2xx; the draft was reset.
    Accepted,
    /// The endpoint answered with a failure status; the draft was kept.
    Rejected { status: u16 },
    /// The request never completed; the draft was kept.
    NetworkFailed { message: String },
}

// ---------------------------------------------------------------------------
// FormController
// ---------------------------------------------------------------------------

/// Owns one page session's draft and drives its submission.
pub struct FormController {
    client: IntakeClient,
    draft: DraftRecord,
    errors: FieldErrors,
    banner: Option<Banner>,
    phase: Phase,
    last_submitted: Option<OnboardingRecord>,
    today: fn() -> NaiveDate,
}

impl FormController {
    /// A blank form that submits through `client`.
    pub fn new(client: IntakeClient) -> Self {
        Self {
            client,
            draft: DraftRecord::default(),
            errors: FieldErrors::new(),
            banner: None,
            phase: Phase::Idle,
            last_submitted: None,
            today: validation::local_today,
        }
    }

    /// Replace the clock used for the start-date rule.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    // -- Read access ------------------------------------------------------

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a submission is waiting on the intake endpoint.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn last_submitted(&self) -> Option<&OnboardingRecord> {
        self.last_submitted.as_ref()
    }

    /// Pretty-printed JSON of the last record sent, for the side panel.
    pub fn readout(&self) -> Option<String> {
        self.last_submitted
            .as_ref()
            .and_then(|record| serde_json::to_string_pretty(record).ok())
    }

    // -- Input binding ----------------------------------------------------

    /// Pre-select a service named by the page's `service` query parameter.
    /// Unknown names are ignored.
    pub fn prefill_service(&mut self, service: &str) -> bool {
        let applied = self.draft.preselect_service(service);
        if applied {
            tracing::debug!(service, "Pre-selected service from query");
        }
        applied
    }

    /// Bind a whole draft at once, as posted by a form.
    pub fn set_draft(&mut self, draft: DraftRecord) {
        self.draft = draft;
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.draft.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.draft.company_name = value.into();
    }

    pub fn toggle_service(&mut self, kind: ServiceKind, checked: bool) {
        self.draft.toggle_service(kind, checked);
    }

    pub fn set_budget_usd(&mut self, value: impl Into<String>) {
        self.draft.budget_usd = value.into();
    }

    pub fn set_project_start_date(&mut self, value: impl Into<String>) {
        self.draft.project_start_date = value.into();
    }

    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.draft.accept_terms = accepted;
    }

    /// Back to the initial blank draft with no field errors.
    pub fn reset(&mut self) {
        self.draft = DraftRecord::default();
        self.errors = FieldErrors::new();
    }

    // -- Submit -----------------------------------------------------------

    /// Validate the draft and, if it passes, send it to the intake endpoint.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.set_phase(Phase::Validating);

        let record = match validation::validate_draft(&self.draft, (self.today)()) {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(failed_fields = errors.len(), "Draft failed validation");
                self.errors = errors.clone();
                self.set_phase(Phase::Invalid);
                self.set_phase(Phase::Idle);
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.errors = FieldErrors::new();
        self.banner = None;
        self.last_submitted = Some(record.clone());
        self.set_phase(Phase::Submitting);

        let outcome = match self.client.submit(&record).await {
            Ok(()) => {
                tracing::info!(
                    services = record.services.len(),
                    has_budget = record.budget_usd.is_some(),
                    "Onboarding record accepted",
                );
                self.banner = Some(Banner::Success(format!(
                    "Form submitted successfully! Thank you, {}.",
                    record.full_name
                )));
                self.reset();
                self.set_phase(Phase::Succeeded);
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(error = %err, endpoint = %self.client.endpoint(), "Onboarding submission failed");
                let message = banner_message(&err);
                self.banner = Some(Banner::Error(message.clone()));
                self.set_phase(Phase::Failed);
                match err {
                    IntakeError::HttpStatus(status) => SubmitOutcome::Rejected { status },
                    IntakeError::Request(_) => SubmitOutcome::NetworkFailed { message },
                }
            }
        };

        self.set_phase(Phase::Idle);
        outcome
    }

    fn set_phase(&mut self, next: Phase) {
        tracing::debug!(from = ?self.phase, to = ?next, "Form phase change");
        self.phase = next;
    }
}

fn banner_message(err: &IntakeError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        NETWORK_ERROR_FALLBACK.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_TIMEOUT;

    fn controller() -> FormController {
        let client = IntakeClient::new("http://localhost:9/intake", DEFAULT_TIMEOUT).unwrap();
        FormController::new(client)
    }

    #[test]
    fn starts_blank_and_idle() {
        let form = controller();
        assert_eq!(form.draft(), &DraftRecord::default());
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.banner().is_none());
        assert!(form.field_errors().is_empty());
        assert!(form.readout().is_none());
    }

    #[test]
    fn submit_label_follows_phase() {
        let mut form = controller();
        assert_eq!(form.submit_label(), "Submit");
        form.phase = Phase::Submitting;
        assert!(form.is_busy());
        assert_eq!(form.submit_label(), "Submitting...");
        form.phase = Phase::Failed;
        assert!(!form.is_busy());
    }

    #[test]
    fn setters_update_draft() {
        let mut form = controller();
        form.set_full_name("Ada");
        form.set_email("ada@example.com");
        form.set_company_name("AE");
        form.set_budget_usd("500");
        form.set_project_start_date("2030-01-01");
        form.set_accept_terms(true);
        form.toggle_service(ServiceKind::Branding, true);

        let draft = form.draft();
        assert_eq!(draft.full_name, "Ada");
        assert_eq!(draft.budget_usd, "500");
        assert_eq!(draft.services, vec!["Branding"]);
        assert!(draft.accept_terms);
    }

    #[test]
    fn prefill_only_accepts_known_services() {
        let mut form = controller();
        assert!(!form.prefill_service("Hosting"));
        assert!(form.draft().services.is_empty());
        assert!(form.prefill_service("UI/UX"));
        assert!(form.draft().has_service(ServiceKind::UiUx));
    }

    #[test]
    fn banner_message_uses_error_text() {
        assert_eq!(banner_message(&IntakeError::HttpStatus(404)), "Error: 404");
    }

    #[test]
    fn banner_accessors() {
        let banner = Banner::Error("Error: 500".into());
        assert!(banner.is_error());
        assert_eq!(banner.message(), "Error: 500");
        assert!(!Banner::Success("ok".into()).is_error());
    }
}
