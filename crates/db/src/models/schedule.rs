//! Weekly schedule model and DTOs (step 6).

use chrono::NaiveTime;
use doconboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `schedules` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Schedule {
    pub id: DbId,
    /// 0-6 by convention; not range-checked.
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

/// One schedule entry in an `update_schedule` request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleInput {
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// DTO for replacing a doctor's whole weekly schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSchedule {
    #[serde(default)]
    pub schedules: Vec<ScheduleInput>,
}
