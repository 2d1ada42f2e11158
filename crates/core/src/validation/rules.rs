//! Per-field rules and their messages.
//!
//! Each `check_*` function runs one field's rules in order and returns the
//! typed value, or the message of the first rule that failed.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::services::ServiceKind;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const FULL_NAME_MAX_CHARS: usize = 80;
pub const COMPANY_NAME_MIN_CHARS: usize = 2;
pub const COMPANY_NAME_MAX_CHARS: usize = 100;
pub const BUDGET_MIN_USD: u32 = 100;
pub const BUDGET_MAX_USD: u32 = 1_000_000;

/// Date format of the start-date input and of the serialized record.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_FULL_NAME_TOO_SHORT: &str = "Full name must be at least 2 characters";
pub const MSG_FULL_NAME_TOO_LONG: &str = "Full name must be under 80 characters";
pub const MSG_FULL_NAME_CHARSET: &str = "Only letters, spaces, ' and - are allowed";
pub const MSG_EMAIL_INVALID: &str = "Invalid email address";
pub const MSG_COMPANY_TOO_SHORT: &str = "Company name must be at least 2 characters";
pub const MSG_COMPANY_TOO_LONG: &str = "Company name must be under 100 characters";
pub const MSG_SERVICES_EMPTY: &str = "Select at least one service";
pub const MSG_BUDGET_NOT_NUMBER: &str = "Budget must be a number";
pub const MSG_BUDGET_NOT_INTEGER: &str = "Budget must be an integer";
pub const MSG_BUDGET_TOO_LOW: &str = "Minimum budget is 100";
pub const MSG_BUDGET_TOO_HIGH: &str = "Maximum budget is 1,000,000";
pub const MSG_START_DATE_PAST: &str = "Date must be today or later";
pub const MSG_TERMS_REQUIRED: &str = "You must accept the terms.";

pub const MSG_EXPECTED_STRING: &str = "Expected string";
pub const MSG_EXPECTED_ARRAY: &str = "Expected array";
pub const MSG_EXPECTED_BOOLEAN: &str = "Expected boolean";

static FULL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z '\-]*$").expect("valid regex"));

/// Dotted domain ending in an alphabetic TLD of two or more letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("valid regex")
});

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

pub fn check_full_name(raw: &str) -> Result<String, String> {
    let len = raw.chars().count();
    if len < FULL_NAME_MIN_CHARS {
        return Err(MSG_FULL_NAME_TOO_SHORT.into());
    }
    if len > FULL_NAME_MAX_CHARS {
        return Err(MSG_FULL_NAME_TOO_LONG.into());
    }
    if !FULL_NAME_RE.is_match(raw) {
        return Err(MSG_FULL_NAME_CHARSET.into());
    }
    Ok(raw.to_string())
}

pub fn check_email(raw: &str) -> Result<String, String> {
    let well_formed = raw.validate_email()
        && EMAIL_RE.is_match(raw)
        && !raw.starts_with('.')
        && !raw.contains("..");
    if well_formed {
        Ok(raw.to_string())
    } else {
        Err(MSG_EMAIL_INVALID.into())
    }
}

pub fn check_company_name(raw: &str) -> Result<String, String> {
    let len = raw.chars().count();
    if len < COMPANY_NAME_MIN_CHARS {
        return Err(MSG_COMPANY_TOO_SHORT.into());
    }
    if len > COMPANY_NAME_MAX_CHARS {
        return Err(MSG_COMPANY_TOO_LONG.into());
    }
    Ok(raw.to_string())
}

/// Every value must name a known service, then at least one must remain.
pub fn check_services(raw: &[String]) -> Result<BTreeSet<ServiceKind>, String> {
    let services = raw
        .iter()
        .map(|value| value.parse::<ServiceKind>())
        .collect::<Result<BTreeSet<_>, CoreError>>()
        .map_err(|e| e.to_string())?;

    if services.is_empty() {
        return Err(MSG_SERVICES_EMPTY.into());
    }
    Ok(services)
}

/// Blank input means "no budget given", which is allowed.
pub fn check_budget(raw: &str) -> Result<Option<u32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let value: f64 = raw.parse().map_err(|_| MSG_BUDGET_NOT_NUMBER.to_string())?;
    if !value.is_finite() {
        return Err(MSG_BUDGET_NOT_NUMBER.into());
    }
    if value.fract() != 0.0 {
        return Err(MSG_BUDGET_NOT_INTEGER.into());
    }
    if value < f64::from(BUDGET_MIN_USD) {
        return Err(MSG_BUDGET_TOO_LOW.into());
    }
    if value > f64::from(BUDGET_MAX_USD) {
        return Err(MSG_BUDGET_TOO_HIGH.into());
    }
    Ok(Some(value as u32))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// The start date must be `today` or later. An unparseable date fails with
/// the same message.
pub fn check_start_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    match parse_date(raw) {
        Ok(date) if date >= today => Ok(date),
        _ => Err(MSG_START_DATE_PAST.into()),
    }
}

pub fn check_accept_terms(accepted: bool) -> Result<bool, String> {
    if accepted {
        Ok(true)
    } else {
        Err(MSG_TERMS_REQUIRED.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn full_name_accepts_letters_spaces_apostrophes_hyphens() {
        assert!(check_full_name("Ada Lovelace").is_ok());
        assert!(check_full_name("Mary-Jane O'Neil").is_ok());
        assert!(check_full_name("Al").is_ok());
    }

    #[test]
    fn full_name_length_is_checked_before_charset() {
        assert_eq!(check_full_name("1").unwrap_err(), MSG_FULL_NAME_TOO_SHORT);
        assert_eq!(check_full_name(&"9".repeat(81)).unwrap_err(), MSG_FULL_NAME_TOO_LONG);
    }

    #[test]
    fn full_name_length_bounds_are_inclusive() {
        assert!(check_full_name(&"a".repeat(80)).is_ok());
        assert_eq!(check_full_name(&"a".repeat(81)).unwrap_err(), MSG_FULL_NAME_TOO_LONG);
    }

    #[test]
    fn full_name_must_start_with_letter() {
        assert_eq!(check_full_name(" Ada").unwrap_err(), MSG_FULL_NAME_CHARSET);
        assert_eq!(check_full_name("-Ada").unwrap_err(), MSG_FULL_NAME_CHARSET);
        assert_eq!(check_full_name("John123").unwrap_err(), MSG_FULL_NAME_CHARSET);
    }

    #[test]
    fn full_name_rejects_non_ascii_letters() {
        assert_eq!(check_full_name("Zoë").unwrap_err(), MSG_FULL_NAME_CHARSET);
    }

    #[test]
    fn email_syntax() {
        assert!(check_email("ada@example.com").is_ok());
        assert_eq!(check_email("not-an-email").unwrap_err(), MSG_EMAIL_INVALID);
        assert_eq!(check_email("").unwrap_err(), MSG_EMAIL_INVALID);
        assert_eq!(check_email("ada@").unwrap_err(), MSG_EMAIL_INVALID);
    }

    #[test]
    fn email_needs_dotted_domain_and_no_double_dots() {
        assert!(check_email("o'neil+tag@mail.example.co").is_ok());
        for bad in [
            "a@b",
            "ada@localhost",
            "ada@example",
            "ada..x@example.com",
            ".ada@example.com",
            "ada@example.c",
            "ada@example.123",
        ] {
            assert_eq!(check_email(bad).unwrap_err(), MSG_EMAIL_INVALID, "{bad}");
        }
    }

    #[test]
    fn company_name_length() {
        assert_eq!(check_company_name("A").unwrap_err(), MSG_COMPANY_TOO_SHORT);
        assert!(check_company_name("AB").is_ok());
        assert!(check_company_name(&"x".repeat(100)).is_ok());
        assert_eq!(check_company_name(&"x".repeat(101)).unwrap_err(), MSG_COMPANY_TOO_LONG);
    }

    #[test]
    fn services_need_one_known_value() {
        assert_eq!(check_services(&[]).unwrap_err(), MSG_SERVICES_EMPTY);

        let set = check_services(&["Web Dev".into(), "UI/UX".into(), "Web Dev".into()]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&ServiceKind::UiUx));
    }

    #[test]
    fn services_reject_unknown_value() {
        let err = check_services(&["Branding".into(), "Hosting".into()]).unwrap_err();
        assert_eq!(err, "Invalid service 'Hosting'");
    }

    #[test]
    fn budget_blank_is_absent() {
        assert_eq!(check_budget("").unwrap(), None);
        assert_eq!(check_budget("   ").unwrap(), None);
    }

    #[test]
    fn budget_range_is_inclusive() {
        assert_eq!(check_budget("100").unwrap(), Some(100));
        assert_eq!(check_budget("1000000").unwrap(), Some(1_000_000));
        assert_eq!(check_budget("99").unwrap_err(), MSG_BUDGET_TOO_LOW);
        assert_eq!(check_budget("1000001").unwrap_err(), MSG_BUDGET_TOO_HIGH);
    }

    #[test]
    fn budget_must_be_whole_number() {
        assert_eq!(check_budget("150.5").unwrap_err(), MSG_BUDGET_NOT_INTEGER);
        assert_eq!(check_budget("150.0").unwrap(), Some(150));
        assert_eq!(check_budget("abc").unwrap_err(), MSG_BUDGET_NOT_NUMBER);
        assert_eq!(check_budget("NaN").unwrap_err(), MSG_BUDGET_NOT_NUMBER);
    }

    #[test]
    fn start_date_today_or_later() {
        assert_eq!(check_start_date("2026-10-17", today()).unwrap(), today());
        assert!(check_start_date("2027-01-01", today()).is_ok());
        assert_eq!(check_start_date("2026-10-16", today()).unwrap_err(), MSG_START_DATE_PAST);
    }

    #[test]
    fn start_date_unparseable_fails() {
        assert_eq!(check_start_date("", today()).unwrap_err(), MSG_START_DATE_PAST);
        assert_eq!(check_start_date("tomorrow", today()).unwrap_err(), MSG_START_DATE_PAST);
        assert_eq!(check_start_date("2026-13-01", today()).unwrap_err(), MSG_START_DATE_PAST);
    }

    #[test]
    fn parse_date_reports_raw_input() {
        let err = parse_date("17/10/2026").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date '17/10/2026'");
    }

    #[test]
    fn terms_must_be_accepted() {
        assert!(check_accept_terms(true).is_ok());
        assert_eq!(check_accept_terms(false).unwrap_err(), MSG_TERMS_REQUIRED);
    }
}
