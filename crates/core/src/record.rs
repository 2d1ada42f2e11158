//! Draft and validated onboarding records.
//!
//! [`DraftRecord`] holds whatever the user has typed so far, with no
//! guarantees. [`OnboardingRecord`] is only ever produced by the
//! validation schema and is what gets sent to the intake endpoint.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::ServiceKind;

// ---------------------------------------------------------------------------
// Validated record
// ---------------------------------------------------------------------------

/// A submission-ready record. Every field rule has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: BTreeSet<ServiceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<u32>,
    /// Serialized as `YYYY-MM-DD`.
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

// ---------------------------------------------------------------------------
// Draft record
// ---------------------------------------------------------------------------

/// In-progress form state.
///
/// Budget and start date stay as raw text until validation so a half-typed
/// value never has to be rejected at input time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    /// Raw service names in selection order. Toggling keeps them unique.
    pub services: Vec<String>,
    pub budget_usd: String,
    pub project_start_date: String,
    pub accept_terms: bool,
}

impl DraftRecord {
    /// Whether `kind` is currently selected.
    pub fn has_service(&self, kind: ServiceKind) -> bool {
        self.services.iter().any(|s| s == kind.as_str())
    }

    /// Check (`checked = true`) or uncheck a service box.
    pub fn toggle_service(&mut self, kind: ServiceKind, checked: bool) {
        if checked {
            if !self.has_service(kind) {
                self.services.push(kind.as_str().to_string());
            }
        } else {
            self.services.retain(|s| s != kind.as_str());
        }
    }

    /// Replace the selection with a single service when `raw` names one.
    ///
    /// Returns `false` and leaves the selection untouched otherwise.
    pub fn preselect_service(&mut self, raw: &str) -> bool {
        match raw.parse::<ServiceKind>() {
            Ok(kind) => {
                self.services = vec![kind.as_str().to_string()];
                true
            }
            Err(_) => false,
        }
    }
}
