//! `onboard-intake` -- form controller and the intake endpoint client.

pub mod client;
pub mod controller;

pub use client::{IntakeClient, IntakeError};
pub use controller::{Banner, FormController, Phase, SubmitOutcome};
