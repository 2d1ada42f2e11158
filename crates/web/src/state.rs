use onboard_intake::IntakeClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Read-only and cheaply cloneable. Each request builds its own
/// `FormController` from `intake`, so requests never share a draft.
#[derive(Clone)]
pub struct AppState {
    /// Client for the intake endpoint.
    pub intake: IntakeClient,
}
