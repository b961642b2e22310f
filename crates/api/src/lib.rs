//! Doctor onboarding API server library.
//!
//! Exposes config, state, error handling, the router and its routes so
//! integration tests and the binary entrypoint share one construction path.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
