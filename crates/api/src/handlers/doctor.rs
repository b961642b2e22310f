//! Handlers for doctor onboarding.
//!
//! Queries return `{ "data": null }` for an unknown doctor. Step mutations
//! on an unknown doctor fail with 404. Every mutation answers with the
//! freshly recomposed doctor aggregate.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use doconboard_core::error::CoreError;
use doconboard_core::onboarding::{unique_department_ids, OnboardingStatus, OnboardingStep};
use doconboard_core::registration::{ensure_not_registered, RegistrationKey};
use doconboard_core::types::DbId;
use doconboard_db::models::address::AddressInput;
use doconboard_db::models::appointment_settings::AppointmentSettingsInput;
use doconboard_db::models::department::AddDepartments;
use doconboard_db::models::doctor::{
    Doctor, DoctorRow, StartOnboarding, UpdateDoctorName, UpdateProfileImage,
    UpdateQualificationsAndBio,
};
use doconboard_db::models::schedule::UpdateSchedule;
use doconboard_db::repositories::{DoctorAggregateRepo, DoctorRepo, OnboardingRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /doctors`.
#[derive(Debug, Deserialize)]
pub struct ListDoctorsParams {
    pub status: Option<String>,
}

/// Query parameters for `GET /doctors/check-registration`.
#[derive(Debug, Deserialize)]
pub struct CheckRegistrationParams {
    pub email: Option<String>,
    pub register_no: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Turn a mutator's result into the recomposed aggregate, or 404.
async fn compose_updated(
    state: &AppState,
    id: DbId,
    row: Option<DoctorRow>,
) -> AppResult<Doctor> {
    let row = row.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Doctor",
        id,
    }))?;
    Ok(DoctorAggregateRepo::compose(&state.pool, row).await?)
}

fn log_step(doctor_id: DbId, step: OnboardingStep, current_step: i32) {
    tracing::info!(
        doctor_id,
        step = step.to_number(),
        step_label = step.label(),
        current_step,
        "Onboarding step saved"
    );
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /doctors?status=
///
/// Newest first. An unknown status value is rejected with 400.
pub async fn all_doctors(
    State(state): State<AppState>,
    Query(params): Query<ListDoctorsParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .map(OnboardingStatus::from_str_db)
        .transpose()?;

    let rows = DoctorRepo::list(&state.pool, status).await?;
    let doctors = DoctorAggregateRepo::compose_all(&state.pool, rows).await?;

    tracing::debug!(
        status = status.map(|s| s.as_str()),
        count = doctors.len(),
        "Listed doctors"
    );

    Ok(Json(DataResponse { data: doctors }))
}

/// GET /doctors/{id}
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let doctor = DoctorAggregateRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: doctor }))
}

/// GET /doctors/check-registration?email=&register_no=
///
/// Lists every doctor matching the email OR the registration number.
/// Blank or missing arguments do not participate; with neither given the
/// list is empty.
pub async fn check_registration(
    State(state): State<AppState>,
    Query(params): Query<CheckRegistrationParams>,
) -> AppResult<impl IntoResponse> {
    let Some(key) =
        RegistrationKey::lookup(params.email.as_deref(), params.register_no.as_deref())
    else {
        return Ok(Json(DataResponse {
            data: Vec::<Doctor>::new(),
        }));
    };

    let rows = DoctorRepo::find_by_registration(&state.pool, &key).await?;
    let doctors = DoctorAggregateRepo::compose_all(&state.pool, rows).await?;

    tracing::debug!(count = doctors.len(), "Checked registration");

    Ok(Json(DataResponse { data: doctors }))
}

/// GET /doctors/{id}/onboarding
pub async fn get_onboarding_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let metadata = OnboardingRepo::metadata(&state.pool, id).await?;
    Ok(Json(DataResponse { data: metadata }))
}

// ---------------------------------------------------------------------------
// Step 1: POST /doctors
// ---------------------------------------------------------------------------

/// Register a new doctor at step 1.
///
/// Blank keys are rejected with 400. Rejects the request with 409 when any
/// doctor already has the email or the registration number. The unique constraints on `doctors` back this
/// check up for concurrent registrations.
pub async fn start_onboarding(
    State(state): State<AppState>,
    Json(body): Json<StartOnboarding>,
) -> AppResult<impl IntoResponse> {
    let key = RegistrationKey::for_new_doctor(&body.register_no, &body.email)?;
    let already_registered = DoctorRepo::registration_exists(&state.pool, &key).await?;
    ensure_not_registered(already_registered)?;

    let row = DoctorRepo::create(&state.pool, &body).await?;
    let doctor = DoctorAggregateRepo::compose(&state.pool, row).await?;

    tracing::info!(
        doctor_id = doctor.id,
        mobile_count = doctor.mobile_numbers.len(),
        "Doctor onboarding started"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: doctor })))
}

// ---------------------------------------------------------------------------
// Steps 2-8
// ---------------------------------------------------------------------------

/// PUT /doctors/{id}/name (step 2)
pub async fn update_doctor_name(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateDoctorName>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::update_name(&state.pool, id, &body.name).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::Name, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

/// PUT /doctors/{id}/qualifications (step 3)
///
/// Overwrites the bio and replaces both lists together.
pub async fn update_qualifications_and_bio(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateQualificationsAndBio>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::update_qualifications_and_bio(&state.pool, id, &body).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::QualificationsAndBio, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

/// PUT /doctors/{id}/address (step 4)
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<AddressInput>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::update_address(&state.pool, id, &body).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::Address, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

/// PUT /doctors/{id}/appointment-settings (step 5)
pub async fn update_appointment_settings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<AppointmentSettingsInput>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::update_appointment_settings(&state.pool, id, &body).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::AppointmentSettings, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

/// PUT /doctors/{id}/schedule (step 6)
///
/// Replaces the whole weekly schedule. An empty list clears it.
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateSchedule>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::update_schedule(&state.pool, id, &body.schedules).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::Schedule, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

/// PUT /doctors/{id}/departments (step 7)
///
/// Replaces the department links. Repeated ids collapse to one link; an
/// unknown id is rejected with 400 and leaves the old links in place.
pub async fn add_departments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<AddDepartments>,
) -> AppResult<impl IntoResponse> {
    let department_ids = unique_department_ids(&body.department_ids);
    let row = DoctorRepo::set_departments(&state.pool, id, &department_ids).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::Departments, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

/// PUT /doctors/{id}/profile-image (step 8)
pub async fn update_profile_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProfileImage>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::update_profile_image(&state.pool, id, &body.image_url).await?;
    let doctor = compose_updated(&state, id, row).await?;
    log_step(id, OnboardingStep::ProfileImage, doctor.current_step);
    Ok(Json(DataResponse { data: doctor }))
}

// ---------------------------------------------------------------------------
// POST /doctors/{id}/complete
// ---------------------------------------------------------------------------

/// Mark onboarding as completed.
///
/// Does not require any step to be finished and leaves `current_step`
/// untouched.
pub async fn complete_onboarding(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = DoctorRepo::complete(&state.pool, id).await?;
    let doctor = compose_updated(&state, id, row).await?;

    tracing::info!(
        doctor_id = id,
        current_step = doctor.current_step,
        "Doctor onboarding completed"
    );

    Ok(Json(DataResponse { data: doctor }))
}
