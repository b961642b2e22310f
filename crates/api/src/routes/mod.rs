pub mod department;
pub mod doctor;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /departments                                     list
/// /departments/search                              search (?search)
///
/// /doctors                                         list (?status), start onboarding (POST)
/// /doctors/check-registration                      lookup (?email, register_no)
/// /doctors/{id}                                    get aggregate
/// /doctors/{id}/onboarding                         progress metadata
/// /doctors/{id}/name                               step 2 (PUT)
/// /doctors/{id}/qualifications                     step 3 (PUT)
/// /doctors/{id}/address                            step 4 (PUT)
/// /doctors/{id}/appointment-settings               step 5 (PUT)
/// /doctors/{id}/schedule                           step 6 (PUT)
/// /doctors/{id}/departments                        step 7 (PUT)
/// /doctors/{id}/profile-image                      step 8 (PUT)
/// /doctors/{id}/complete                           complete onboarding (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/departments", department::router())
        .nest("/doctors", doctor::router())
}
