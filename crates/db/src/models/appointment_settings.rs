//! Appointment settings model and DTO (step 5).

use doconboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `appointment_settings` table (at most one per doctor).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AppointmentSettings {
    pub id: DbId,
    pub consultation_charge: i32,
    pub follow_up_charge: i32,
    pub follow_up_period_days: i32,
    pub advance_booking_days: i32,
    pub avg_duration_minutes: i32,
}

/// DTO for creating or replacing appointment settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentSettingsInput {
    pub consultation_charge: i32,
    pub follow_up_charge: i32,
    pub follow_up_period_days: i32,
    pub advance_booking_days: i32,
    pub avg_duration_minutes: i32,
}
