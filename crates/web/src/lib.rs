//! Onboarding page host.
//!
//! Exposes the building blocks (config, state, routes, rendering) so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod handlers;
pub mod render;
pub mod router;
pub mod routes;
pub mod state;
