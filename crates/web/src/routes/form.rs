//! Route definitions for the onboarding page.

use axum::routing::get;
use axum::Router;

use crate::handlers::form;
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// GET    /           -> show_form   (optional ?service= pre-fill)
/// POST   /           -> submit_form (urlencoded form post)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(form::show_form).post(form::submit_form))
}
