//! Doctor root row, the composed doctor aggregate, and step DTOs.

use doconboard_core::onboarding::OnboardingStatus;
use doconboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::address::Address;
use crate::models::appointment_settings::AppointmentSettings;
use crate::models::department::Department;
use crate::models::schedule::Schedule;

/// A row from the `doctors` table, exactly as the store returns it.
#[derive(Debug, Clone, FromRow)]
pub struct DoctorRow {
    pub id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub register_no: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    /// One of `in_progress`, `completed`, `pending_review`.
    pub onboarding_status: String,
    pub current_step: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fully composed doctor view returned by every query and mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    pub id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub register_no: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub onboarding_status: OnboardingStatus,
    pub current_step: i32,
    pub mobile_numbers: Vec<String>,
    pub departments: Vec<Department>,
    pub qualifications: Vec<String>,
    pub specializations: Vec<String>,
    pub address: Option<Address>,
    pub appointment_settings: Option<AppointmentSettings>,
    pub schedules: Vec<Schedule>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for step 1: create the root row and its mobile numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct StartOnboarding {
    pub register_no: String,
    pub email: String,
    #[serde(default)]
    pub mobile_numbers: Vec<String>,
}

/// DTO for step 2.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDoctorName {
    pub name: String,
}

/// DTO for step 3. Both lists are replaced wholesale; `bio` is overwritten
/// (an omitted bio clears it).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQualificationsAndBio {
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub bio: Option<String>,
}

/// DTO for step 8.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileImage {
    pub image_url: String,
}
