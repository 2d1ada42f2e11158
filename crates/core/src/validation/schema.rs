//! Whole-record validation.
//!
//! Pure functions: the result depends only on the input and the `today`
//! reference passed in.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::errors::{Field, FieldErrors};
use super::rules;
use crate::record::{DraftRecord, OnboardingRecord};

/// The local calendar date used as the start-date lower bound.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Validate a draft, returning the typed record or one message per failing
/// field.
pub fn validate_draft(
    draft: &DraftRecord,
    today: NaiveDate,
) -> Result<OnboardingRecord, FieldErrors> {
    check_all(draft, today, FieldErrors::new())
}

/// Validate arbitrary JSON input.
///
/// Values of the wrong JSON type fail with a type message for their field;
/// missing keys and `null` read as blank. Never fails for any other reason.
pub fn validate_value(value: &Value, today: NaiveDate) -> Result<OnboardingRecord, FieldErrors> {
    let mut errors = FieldErrors::new();
    let draft = draft_from_value(value, &mut errors);
    check_all(&draft, today, errors)
}

fn check_all(
    draft: &DraftRecord,
    today: NaiveDate,
    mut errors: FieldErrors,
) -> Result<OnboardingRecord, FieldErrors> {
    let full_name = keep(&mut errors, Field::FullName, rules::check_full_name(&draft.full_name));
    let email = keep(&mut errors, Field::Email, rules::check_email(&draft.email));
    let company_name = keep(
        &mut errors,
        Field::CompanyName,
        rules::check_company_name(&draft.company_name),
    );
    let services = keep(&mut errors, Field::Services, rules::check_services(&draft.services));
    let budget_usd = keep(&mut errors, Field::BudgetUsd, rules::check_budget(&draft.budget_usd));
    let project_start_date = keep(
        &mut errors,
        Field::ProjectStartDate,
        rules::check_start_date(&draft.project_start_date, today),
    );
    let accept_terms = keep(
        &mut errors,
        Field::AcceptTerms,
        rules::check_accept_terms(draft.accept_terms),
    );

    // Type errors recorded before the rules ran leave `errors` non-empty
    // even when every rule passed on the blank fallback value.
    let (
        Some(full_name),
        Some(email),
        Some(company_name),
        Some(services),
        Some(budget_usd),
        Some(project_start_date),
        Some(accept_terms),
    ) = (
        full_name,
        email,
        company_name,
        services,
        budget_usd,
        project_start_date,
        accept_terms,
    )
    else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OnboardingRecord {
        full_name,
        email,
        company_name,
        services,
        budget_usd,
        project_start_date,
        accept_terms,
    })
}

fn keep<T>(errors: &mut FieldErrors, field: Field, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// JSON coercion
// ---------------------------------------------------------------------------

fn draft_from_value(value: &Value, errors: &mut FieldErrors) -> DraftRecord {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    DraftRecord {
        full_name: text_field(obj, Field::FullName, errors),
        email: text_field(obj, Field::Email, errors),
        company_name: text_field(obj, Field::CompanyName, errors),
        services: services_field(obj, errors),
        budget_usd: budget_field(obj, errors),
        project_start_date: text_field(obj, Field::ProjectStartDate, errors),
        accept_terms: terms_field(obj, errors),
    }
}

fn text_field(obj: &Map<String, Value>, field: Field, errors: &mut FieldErrors) -> String {
    match obj.get(field.as_str()) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.insert(field, rules::MSG_EXPECTED_STRING);
            String::new()
        }
    }
}

/// Non-string items keep their JSON text so the service rule reports them.
fn services_field(obj: &Map<String, Value>, errors: &mut FieldErrors) -> Vec<String> {
    match obj.get(Field::Services.as_str()) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(_) => {
            errors.insert(Field::Services, rules::MSG_EXPECTED_ARRAY);
            Vec::new()
        }
    }
}

/// Numbers and numeric text are both accepted; the budget rule decides.
fn budget_field(obj: &Map<String, Value>, errors: &mut FieldErrors) -> String {
    match obj.get(Field::BudgetUsd.as_str()) {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.insert(Field::BudgetUsd, rules::MSG_BUDGET_NOT_NUMBER);
            String::new()
        }
    }
}

fn terms_field(obj: &Map<String, Value>, errors: &mut FieldErrors) -> bool {
    match obj.get(Field::AcceptTerms.as_str()) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.insert(Field::AcceptTerms, rules::MSG_EXPECTED_BOOLEAN);
            false
        }
    }
}
