//! `onboard-core` -- onboarding record types and the validation schema.
//!
//! No I/O lives here. The form controller and the page host both build on
//! these types.

pub mod error;
pub mod record;
pub mod services;
pub mod validation;
