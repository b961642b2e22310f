//! Domain rules for doctor onboarding.
//!
//! This crate has no I/O: it holds the error taxonomy, shared id and
//! timestamp types, the onboarding step state machine and progress
//! calculator, and the registration (duplicate guard) helpers used by the
//! repository and API layers.

pub mod error;
pub mod onboarding;
pub mod registration;
pub mod search;
pub mod types;
