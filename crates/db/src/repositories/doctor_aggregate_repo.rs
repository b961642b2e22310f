//! Aggregate reader: composes the full [`Doctor`] view.
//!
//! One fetch per dependent collection, no caching. Missing dependents come
//! back as empty collections or `None`, never as errors.

use doconboard_core::onboarding::OnboardingStatus;
use doconboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::doctor::{Doctor, DoctorRow};
use crate::repositories::{
    AddressRepo, AppointmentSettingsRepo, DepartmentRepo, DoctorRepo, MobileNumberRepo,
    QualificationRepo, ScheduleRepo,
};

pub struct DoctorAggregateRepo;

impl DoctorAggregateRepo {
    /// Load the full aggregate for a doctor ID. `None` if the root row is absent.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        match DoctorRepo::find_by_id(pool, id).await? {
            Some(row) => Ok(Some(Self::compose(pool, row).await?)),
            None => Ok(None),
        }
    }

    /// Compose the aggregate for a root row that was already fetched.
    pub async fn compose(pool: &PgPool, row: DoctorRow) -> Result<Doctor, sqlx::Error> {
        let doctor_id = row.id;
        let onboarding_status = decode_status(&row.onboarding_status)?;

        let mobile_numbers = MobileNumberRepo::list_for_doctor(pool, doctor_id).await?;
        let departments = DepartmentRepo::list_for_doctor(pool, doctor_id).await?;
        let qualifications = QualificationRepo::list_qualifications(pool, doctor_id).await?;
        let specializations = QualificationRepo::list_specializations(pool, doctor_id).await?;
        let address = AddressRepo::find_for_doctor(pool, doctor_id).await?;
        let appointment_settings =
            AppointmentSettingsRepo::find_for_doctor(pool, doctor_id).await?;
        let schedules = ScheduleRepo::list_for_doctor(pool, doctor_id).await?;

        Ok(Doctor {
            id: row.id,
            name: row.name,
            email: row.email,
            register_no: row.register_no,
            bio: row.bio,
            profile_image_url: row.profile_image_url,
            onboarding_status,
            current_step: row.current_step,
            mobile_numbers,
            departments,
            qualifications,
            specializations,
            address,
            appointment_settings,
            schedules,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    /// Compose aggregates for several root rows, preserving their order.
    pub async fn compose_all(
        pool: &PgPool,
        rows: Vec<DoctorRow>,
    ) -> Result<Vec<Doctor>, sqlx::Error> {
        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(Self::compose(pool, row).await?);
        }
        Ok(result)
    }
}

/// Map the stored status text to the domain enum.
///
/// The column carries a CHECK constraint, so a failure here means the
/// schema and the enum have drifted apart.
pub(crate) fn decode_status(value: &str) -> Result<OnboardingStatus, sqlx::Error> {
    OnboardingStatus::from_str_db(value).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
