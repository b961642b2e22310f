//! Repository for the `appointment_settings` table.

use doconboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment_settings::{AppointmentSettings, AppointmentSettingsInput};

/// Column list for `appointment_settings` queries.
const COLUMNS: &str = "id, consultation_charge, follow_up_charge, follow_up_period_days, \
     advance_booking_days, avg_duration_minutes";

pub struct AppointmentSettingsRepo;

impl AppointmentSettingsRepo {
    /// Find a doctor's appointment settings, if saved.
    pub async fn find_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Option<AppointmentSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointment_settings WHERE doctor_id = $1");
        sqlx::query_as::<_, AppointmentSettings>(&query)
            .bind(doctor_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the settings in place, or insert them if absent.
    pub(crate) async fn upsert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        doctor_id: DbId,
        input: &AppointmentSettingsInput,
    ) -> Result<AppointmentSettings, sqlx::Error> {
        let existing: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM appointment_settings WHERE doctor_id = $1")
                .bind(doctor_id)
                .fetch_optional(&mut **tx)
                .await?;

        let query = if existing.is_some() {
            format!(
                "UPDATE appointment_settings SET \
                    consultation_charge = $2, follow_up_charge = $3, \
                    follow_up_period_days = $4, advance_booking_days = $5, \
                    avg_duration_minutes = $6, updated_at = NOW() \
                 WHERE doctor_id = $1 \
                 RETURNING {COLUMNS}"
            )
        } else {
            format!(
                "INSERT INTO appointment_settings \
                    (doctor_id, consultation_charge, follow_up_charge, follow_up_period_days, \
                     advance_booking_days, avg_duration_minutes) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING {COLUMNS}"
            )
        };

        sqlx::query_as::<_, AppointmentSettings>(&query)
            .bind(doctor_id)
            .bind(input.consultation_charge)
            .bind(input.follow_up_charge)
            .bind(input.follow_up_period_days)
            .bind(input.advance_booking_days)
            .bind(input.avg_duration_minutes)
            .fetch_one(&mut **tx)
            .await
    }
}
