//! Progress calculator queries.
//!
//! Completion is re-derived from the data that exists right now, never
//! from `current_step` or any stored flag.

use doconboard_core::onboarding::{has_text, OnboardingMetadata, StepPresence};
use doconboard_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::repositories::doctor_aggregate_repo::decode_status;

/// Root progress fields plus one existence probe per dependent table.
#[derive(Debug, FromRow)]
struct ProgressRow {
    name: Option<String>,
    profile_image_url: Option<String>,
    onboarding_status: String,
    current_step: i32,
    has_qualifications: bool,
    has_address: bool,
    has_appointment_settings: bool,
    has_schedules: bool,
    has_departments: bool,
}

pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Build the onboarding summary for a doctor. `None` if the doctor is unknown.
    pub async fn metadata(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Option<OnboardingMetadata>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProgressRow>(
            "SELECT d.name, d.profile_image_url, d.onboarding_status, d.current_step, \
                EXISTS (SELECT 1 FROM qualifications q WHERE q.doctor_id = d.id) \
                    AS has_qualifications, \
                EXISTS (SELECT 1 FROM addresses a WHERE a.doctor_id = d.id) \
                    AS has_address, \
                EXISTS (SELECT 1 FROM appointment_settings s WHERE s.doctor_id = d.id) \
                    AS has_appointment_settings, \
                EXISTS (SELECT 1 FROM schedules sc WHERE sc.doctor_id = d.id) \
                    AS has_schedules, \
                EXISTS (SELECT 1 FROM doctor_departments dd WHERE dd.doctor_id = d.id) \
                    AS has_departments \
             FROM doctors d \
             WHERE d.id = $1",
        )
        .bind(doctor_id)
        .fetch_optional(pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let status = decode_status(&row.onboarding_status)?;
        let presence = StepPresence {
            has_name: has_text(row.name.as_deref()),
            has_qualifications: row.has_qualifications,
            has_address: row.has_address,
            has_appointment_settings: row.has_appointment_settings,
            has_schedules: row.has_schedules,
            has_departments: row.has_departments,
            has_profile_image: has_text(row.profile_image_url.as_deref()),
        };

        tracing::debug!(
            doctor_id,
            completed = ?presence.completed_steps(),
            current_step = row.current_step,
            "Derived onboarding progress"
        );

        Ok(Some(OnboardingMetadata::derive(
            &presence,
            row.current_step,
            status,
        )))
    }
}
