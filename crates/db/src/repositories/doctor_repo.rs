//! Repository for the `doctors` table and the onboarding step mutators.
//!
//! Every step mutator runs in one transaction: it raises `current_step`
//! with `GREATEST(current_step, <step>)`, touches `updated_at`, and writes
//! the step's sub-resources. An unknown doctor id yields `Ok(None)` and the
//! transaction is dropped (rolled back) without writing anything.

use doconboard_core::onboarding::{OnboardingStatus, OnboardingStep};
use doconboard_core::registration::RegistrationKey;
use doconboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::AddressInput;
use crate::models::appointment_settings::AppointmentSettingsInput;
use crate::models::doctor::{DoctorRow, StartOnboarding, UpdateQualificationsAndBio};
use crate::models::schedule::ScheduleInput;
use crate::repositories::{
    AddressRepo, AppointmentSettingsRepo, DepartmentRepo, MobileNumberRepo, QualificationRepo,
    ScheduleRepo,
};

/// Column list for `doctors` queries.
const COLUMNS: &str = "id, name, email, register_no, bio, profile_image_url, \
     onboarding_status, current_step, created_at, updated_at";

/// Provides root-row queries and the per-step write operations.
pub struct DoctorRepo;

impl DoctorRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Find a doctor row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DoctorRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doctors WHERE id = $1");
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find every doctor whose email OR registration number matches the key.
    ///
    /// A `None` field binds SQL NULL, and `col = NULL` never matches, so only
    /// the fields present in the key participate.
    pub async fn find_by_registration(
        pool: &PgPool,
        key: &RegistrationKey,
    ) -> Result<Vec<DoctorRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM doctors \
             WHERE email = $1 OR register_no = $2 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(&key.email)
            .bind(&key.register_no)
            .fetch_all(pool)
            .await
    }

    /// Whether any doctor already holds the key's email OR registration number.
    pub async fn registration_exists(
        pool: &PgPool,
        key: &RegistrationKey,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM doctors WHERE email = $1 OR register_no = $2)",
        )
        .bind(&key.email)
        .bind(&key.register_no)
        .fetch_one(pool)
        .await
    }

    /// List doctors newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<OnboardingStatus>,
    ) -> Result<Vec<DoctorRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM doctors \
             WHERE ($1::text IS NULL OR onboarding_status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Step 1
    // -----------------------------------------------------------------------

    /// Insert a new doctor at step 1 together with its mobile numbers.
    ///
    /// Duplicate email / registration number surfaces as a unique violation
    /// on `uq_doctors_email` or `uq_doctors_register_no`.
    pub async fn create(pool: &PgPool, input: &StartOnboarding) -> Result<DoctorRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO doctors (register_no, email, current_step, onboarding_status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let doctor = sqlx::query_as::<_, DoctorRow>(&query)
            .bind(&input.register_no)
            .bind(&input.email)
            .bind(OnboardingStep::Registration.db_value())
            .bind(OnboardingStatus::InProgress.as_str())
            .fetch_one(&mut *tx)
            .await?;

        MobileNumberRepo::replace_inner(&mut tx, doctor.id, &input.mobile_numbers).await?;

        tx.commit().await?;
        Ok(doctor)
    }

    // -----------------------------------------------------------------------
    // Scalar steps (2, 8)
    // -----------------------------------------------------------------------

    /// Step 2: set the display name.
    pub async fn update_name(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let query = format!(
            "UPDATE doctors SET name = $2, \
                current_step = GREATEST(current_step, $3), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(id)
            .bind(name)
            .bind(OnboardingStep::Name.db_value())
            .fetch_optional(pool)
            .await
    }

    /// Step 8: set the profile image URL.
    pub async fn update_profile_image(
        pool: &PgPool,
        id: DbId,
        image_url: &str,
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let query = format!(
            "UPDATE doctors SET profile_image_url = $2, \
                current_step = GREATEST(current_step, $3), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(id)
            .bind(image_url)
            .bind(OnboardingStep::ProfileImage.db_value())
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Sub-resource steps (3-7)
    // -----------------------------------------------------------------------

    /// Step 3: overwrite the bio and replace qualifications + specializations.
    pub async fn update_qualifications_and_bio(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQualificationsAndBio,
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE doctors SET bio = $2, \
                current_step = GREATEST(current_step, $3), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(doctor) = sqlx::query_as::<_, DoctorRow>(&query)
            .bind(id)
            .bind(&input.bio)
            .bind(OnboardingStep::QualificationsAndBio.db_value())
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        QualificationRepo::replace_inner(
            &mut tx,
            id,
            &input.qualifications,
            &input.specializations,
        )
        .await?;

        tx.commit().await?;
        Ok(Some(doctor))
    }

    /// Step 4: upsert the address.
    pub async fn update_address(
        pool: &PgPool,
        id: DbId,
        input: &AddressInput,
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(doctor) = Self::advance_inner(&mut tx, id, OnboardingStep::Address).await? else {
            return Ok(None);
        };

        AddressRepo::upsert_inner(&mut tx, id, input).await?;

        tx.commit().await?;
        Ok(Some(doctor))
    }

    /// Step 5: upsert appointment settings.
    pub async fn update_appointment_settings(
        pool: &PgPool,
        id: DbId,
        input: &AppointmentSettingsInput,
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(doctor) =
            Self::advance_inner(&mut tx, id, OnboardingStep::AppointmentSettings).await?
        else {
            return Ok(None);
        };

        AppointmentSettingsRepo::upsert_inner(&mut tx, id, input).await?;

        tx.commit().await?;
        Ok(Some(doctor))
    }

    /// Step 6: replace the weekly schedule.
    pub async fn update_schedule(
        pool: &PgPool,
        id: DbId,
        schedules: &[ScheduleInput],
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(doctor) = Self::advance_inner(&mut tx, id, OnboardingStep::Schedule).await? else {
            return Ok(None);
        };

        ScheduleRepo::replace_inner(&mut tx, id, schedules).await?;

        tx.commit().await?;
        Ok(Some(doctor))
    }

    /// Step 7: replace department links.
    pub async fn set_departments(
        pool: &PgPool,
        id: DbId,
        department_ids: &[DbId],
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(doctor) = Self::advance_inner(&mut tx, id, OnboardingStep::Departments).await?
        else {
            return Ok(None);
        };

        DepartmentRepo::replace_links_inner(&mut tx, id, department_ids).await?;

        tx.commit().await?;
        Ok(Some(doctor))
    }

    // -----------------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------------

    /// Mark onboarding as completed. `current_step` is left untouched.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<DoctorRow>, sqlx::Error> {
        let query = format!(
            "UPDATE doctors SET onboarding_status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(id)
            .bind(OnboardingStatus::Completed.as_str())
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Raise `current_step` to at least `step` and touch `updated_at`.
    ///
    /// Also takes the row lock that serializes concurrent writers to the
    /// same doctor for the rest of the transaction.
    async fn advance_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        step: OnboardingStep,
    ) -> Result<Option<DoctorRow>, sqlx::Error> {
        let query = format!(
            "UPDATE doctors SET current_step = GREATEST(current_step, $2), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DoctorRow>(&query)
            .bind(id)
            .bind(step.db_value())
            .fetch_optional(&mut **tx)
            .await
    }
}
