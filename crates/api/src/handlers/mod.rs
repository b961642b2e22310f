//! Request handlers.
//!
//! Handlers delegate to the repositories in `doconboard_db`, apply the
//! domain rules from `doconboard_core`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod department;
pub mod doctor;
