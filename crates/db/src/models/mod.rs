//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - `Deserialize` input DTOs for the mutations that write it

pub mod address;
pub mod appointment_settings;
pub mod department;
pub mod doctor;
pub mod schedule;
