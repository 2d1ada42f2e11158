//! Handlers for the onboarding page.
//!
//! Every request gets a fresh [`FormController`]. `GET` renders it blank
//! (or pre-filled from `?service=`); `POST` binds the posted fields into
//! its draft, runs the submit sequence, and renders the result.

use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, X_CONTENT_TYPE_OPTIONS};
use axum::http::{HeaderName, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::Form;
use serde::Deserialize;

use onboard_core::record::DraftRecord;
use onboard_intake::{FormController, SubmitOutcome};

use crate::render;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters of `GET /`, in URL order. Keys may repeat.
pub type PageQuery = Vec<(String, String)>;

/// The first `service` value in the query, like `URLSearchParams.get`.
fn first_service(query: &PageQuery) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == "service")
        .map(|(_, value)| value.as_str())
}

/// Fields posted by the page's form.
///
/// Checkboxes are absent when unchecked; `services` repeats once per
/// checked box.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSubmission {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<String>,
    pub budget_usd: String,
    pub project_start_date: String,
    pub accept_terms: Option<String>,
}

impl From<FormSubmission> for DraftRecord {
    fn from(form: FormSubmission) -> Self {
        let mut services: Vec<String> = Vec::with_capacity(form.services.len());
        for service in form.services {
            if !services.contains(&service) {
                services.push(service);
            }
        }

        DraftRecord {
            full_name: form.full_name,
            email: form.email,
            company_name: form.company_name,
            services,
            budget_usd: form.budget_usd,
            project_start_date: form.project_start_date,
            accept_terms: form.accept_terms.is_some(),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Render the blank form, pre-selecting a service named in the query.
pub async fn show_form(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut controller = FormController::new(state.intake);
    if let Some(service) = first_service(&query) {
        controller.prefill_service(service);
    }
    page(StatusCode::OK, &controller)
}

// ---------------------------------------------------------------------------
// POST /
// ---------------------------------------------------------------------------

/// Validate and forward a posted form, then render the outcome.
///
/// 200 when the intake endpoint accepted the record, 422 when the draft
/// failed validation, 502 when the endpoint rejected it or was unreachable.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Response {
    let mut controller = FormController::new(state.intake);
    controller.set_draft(submission.into());

    let status = match controller.submit().await {
        SubmitOutcome::Accepted => StatusCode::OK,
        SubmitOutcome::Invalid(errors) => {
            tracing::debug!(failed_fields = errors.len(), "Rejected invalid form post");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmitOutcome::Rejected { status } => {
            tracing::warn!(status, "Intake endpoint rejected submission");
            StatusCode::BAD_GATEWAY
        }
        SubmitOutcome::NetworkFailed { message } => {
            tracing::warn!(error = %message, "Intake endpoint unreachable");
            StatusCode::BAD_GATEWAY
        }
    };

    page(status, &controller)
}

fn common_headers() -> [(HeaderName, &'static str); 2] {
    [(X_CONTENT_TYPE_OPTIONS, "nosniff"), (CACHE_CONTROL, "no-store")]
}

fn page(status: StatusCode, controller: &FormController) -> Response {
    (status, common_headers(), Html(render::render_page(controller))).into_response()
}
