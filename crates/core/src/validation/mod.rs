//! Onboarding validation schema.
//!
//! Field rules live in [`rules`] as plain predicate functions; [`schema`]
//! runs them in a fixed order and collects at most one message per field
//! into [`FieldErrors`].

pub mod errors;
pub mod rules;
pub mod schema;

pub use errors::{Field, FieldErrors};
pub use schema::{local_today, validate_draft, validate_value};
