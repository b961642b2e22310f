//! Department lookup model.

use doconboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `departments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub icon_name: Option<String>,
}

/// DTO for replacing a doctor's department links (step 7).
#[derive(Debug, Clone, Deserialize)]
pub struct AddDepartments {
    #[serde(default)]
    pub department_ids: Vec<DbId>,
}
