//! Route definitions for doctor onboarding.
//!
//! Mounted at `/doctors` by `api_routes()`.
//!
//! ```text
//! GET    /                              all_doctors (?status)
//! POST   /                              start_onboarding
//! GET    /check-registration            check_registration (?email, register_no)
//! GET    /{id}                          get_doctor
//! GET    /{id}/onboarding               get_onboarding_metadata
//! PUT    /{id}/name                     update_doctor_name
//! PUT    /{id}/qualifications           update_qualifications_and_bio
//! PUT    /{id}/address                  update_address
//! PUT    /{id}/appointment-settings     update_appointment_settings
//! PUT    /{id}/schedule                 update_schedule
//! PUT    /{id}/departments              add_departments
//! PUT    /{id}/profile-image            update_profile_image
//! POST   /{id}/complete                 complete_onboarding
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::doctor;
use crate::state::AppState;

/// Doctor routes, mounted at `/doctors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(doctor::all_doctors).post(doctor::start_onboarding))
        .route("/check-registration", get(doctor::check_registration))
        .route("/{id}", get(doctor::get_doctor))
        .route("/{id}/onboarding", get(doctor::get_onboarding_metadata))
        .route("/{id}/name", put(doctor::update_doctor_name))
        .route(
            "/{id}/qualifications",
            put(doctor::update_qualifications_and_bio),
        )
        .route("/{id}/address", put(doctor::update_address))
        .route(
            "/{id}/appointment-settings",
            put(doctor::update_appointment_settings),
        )
        .route("/{id}/schedule", put(doctor::update_schedule))
        .route("/{id}/departments", put(doctor::add_departments))
        .route("/{id}/profile-image", put(doctor::update_profile_image))
        .route("/{id}/complete", post(doctor::complete_onboarding))
}
