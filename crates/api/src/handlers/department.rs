//! Handlers for the shared department lookup.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use doconboard_db::repositories::DepartmentRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /departments/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

/// GET /departments
pub async fn list_departments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    tracing::debug!(count = departments.len(), "Listed departments");
    Ok(Json(DataResponse { data: departments }))
}

/// GET /departments/search?search=
///
/// Case-insensitive substring match on the department name. An empty
/// search string matches every department.
pub async fn search_departments(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let departments = DepartmentRepo::search(&state.pool, &params.search).await?;
    tracing::debug!(
        search = %params.search,
        count = departments.len(),
        "Searched departments"
    );
    Ok(Json(DataResponse { data: departments }))
}
