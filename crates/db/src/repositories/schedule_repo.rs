//! Repository for the `schedules` table.

use doconboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::{Schedule, ScheduleInput};

/// Column list for `schedules` queries.
const COLUMNS: &str = "id, day_of_week, start_time, end_time, is_available";

pub struct ScheduleRepo;

impl ScheduleRepo {
    /// List a doctor's schedule entries ordered by day of week.
    pub async fn list_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedules \
             WHERE doctor_id = $1 \
             ORDER BY day_of_week, id"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(doctor_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the whole schedule within an existing transaction.
    pub(crate) async fn replace_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        doctor_id: DbId,
        schedules: &[ScheduleInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM schedules WHERE doctor_id = $1")
            .bind(doctor_id)
            .execute(&mut **tx)
            .await?;

        for entry in schedules {
            sqlx::query(
                "INSERT INTO schedules \
                    (doctor_id, day_of_week, start_time, end_time, is_available) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(doctor_id)
            .bind(entry.day_of_week)
            .bind(entry.start_time)
            .bind(entry.end_time)
            .bind(entry.is_available)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
