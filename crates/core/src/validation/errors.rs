//! Field-keyed validation failures.

use std::collections::BTreeMap;

use serde::Serialize;

/// A field of the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::CompanyName,
        Field::Services,
        Field::BudgetUsd,
        Field::ProjectStartDate,
        Field::AcceptTerms,
    ];

    /// The camelCase key used in JSON and form posts.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::CompanyName => "companyName",
            Field::Services => "services",
            Field::BudgetUsd => "budgetUsd",
            Field::ProjectStartDate => "projectStartDate",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

/// One message per failing field. The first message recorded for a field
/// is kept; later ones are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    /// Returns whether the message was stored.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) -> bool {
        if self.0.contains_key(&field) {
            return false;
        }
        self.0.insert(field, message.into());
        true
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
