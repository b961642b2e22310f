//! Route definitions for the department lookup.
//!
//! Mounted at `/departments` by `api_routes()`.
//!
//! ```text
//! GET    /                              list_departments
//! GET    /search                        search_departments (?search)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// Department routes, mounted at `/departments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(department::list_departments))
        .route("/search", get(department::search_departments))
}
