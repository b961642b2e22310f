//! Doctor onboarding state machine and progress calculator.
//!
//! A doctor record moves through eight ordered steps. Each step mutation
//! raises `current_step` to at least [`OnboardingStep::db_value`] in SQL
//! (`GREATEST`), and `complete_onboarding` flips the status without
//! touching the step.
//!
//! Progress is reported separately: [`StepPresence`] captures which
//! sub-resources actually exist in the store right now, and
//! [`OnboardingMetadata::derive`] turns that into the list of completed
//! steps. The two views are never reconciled.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Onboarding status
// ---------------------------------------------------------------------------

/// Status values stored in `doctors.onboarding_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    InProgress,
    Completed,
    PendingReview,
}

impl OnboardingStatus {
    /// Parse a status string from the database or a query parameter.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "pending_review" => Ok(Self::PendingReview),
            _ => Err(CoreError::Validation(format!(
                "Invalid onboarding status '{s}'. Must be one of: in_progress, completed, pending_review"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::PendingReview => "pending_review",
        }
    }
}

// ---------------------------------------------------------------------------
// Onboarding steps
// ---------------------------------------------------------------------------

/// The eight onboarding steps, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Registration,
    Name,
    QualificationsAndBio,
    Address,
    AppointmentSettings,
    Schedule,
    Departments,
    ProfileImage,
}

/// Total number of onboarding steps.
pub const TOTAL_STEPS: u8 = 8;

impl OnboardingStep {
    /// Every step in declared order.
    pub const ALL: [OnboardingStep; TOTAL_STEPS as usize] = [
        Self::Registration,
        Self::Name,
        Self::QualificationsAndBio,
        Self::Address,
        Self::AppointmentSettings,
        Self::Schedule,
        Self::Departments,
        Self::ProfileImage,
    ];

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Registration => 1,
            Self::Name => 2,
            Self::QualificationsAndBio => 3,
            Self::Address => 4,
            Self::AppointmentSettings => 5,
            Self::Schedule => 6,
            Self::Departments => 7,
            Self::ProfileImage => 8,
        }
    }

    /// Step number in the representation of the `doctors.current_step` column.
    pub fn db_value(self) -> i32 {
        i32::from(self.to_number())
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Name => "Name",
            Self::QualificationsAndBio => "Qualifications & Bio",
            Self::Address => "Address",
            Self::AppointmentSettings => "Appointment Settings",
            Self::Schedule => "Schedule",
            Self::Departments => "Departments",
            Self::ProfileImage => "Profile Image",
        }
    }
}

// ---------------------------------------------------------------------------
// Progress calculator
// ---------------------------------------------------------------------------

/// Which step-owned data currently exists for a doctor.
///
/// Built from live store reads, never from stored flags. Step 1 has no
/// field because a persisted root row is step-1-complete by definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepPresence {
    pub has_name: bool,
    pub has_qualifications: bool,
    pub has_address: bool,
    pub has_appointment_settings: bool,
    pub has_schedules: bool,
    pub has_departments: bool,
    pub has_profile_image: bool,
}

impl StepPresence {
    /// Whether the data owned by `step` is present.
    pub fn is_complete(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::Registration => true,
            OnboardingStep::Name => self.has_name,
            OnboardingStep::QualificationsAndBio => self.has_qualifications,
            OnboardingStep::Address => self.has_address,
            OnboardingStep::AppointmentSettings => self.has_appointment_settings,
            OnboardingStep::Schedule => self.has_schedules,
            OnboardingStep::Departments => self.has_departments,
            OnboardingStep::ProfileImage => self.has_profile_image,
        }
    }

    /// Ascending step numbers whose data is present. May have gaps.
    pub fn completed_steps(&self) -> Vec<u8> {
        OnboardingStep::ALL
            .iter()
            .copied()
            .filter(|step| self.is_complete(*step))
            .map(OnboardingStep::to_number)
            .collect()
    }
}

/// Whether a nullable text column counts as "filled in".
///
/// Empty strings count as missing.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Derived progress summary for one doctor. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingMetadata {
    pub total_steps: u8,
    pub completed_steps: Vec<u8>,
    pub current_step: i32,
    pub is_complete: bool,
}

impl OnboardingMetadata {
    /// Combine live presence data with the root row's progress fields.
    pub fn derive(presence: &StepPresence, current_step: i32, status: OnboardingStatus) -> Self {
        Self {
            total_steps: TOTAL_STEPS,
            completed_steps: presence.completed_steps(),
            current_step,
            is_complete: status == OnboardingStatus::Completed,
        }
    }
}

// ---------------------------------------------------------------------------
// Department selection
// ---------------------------------------------------------------------------

/// Drop repeated department ids, keeping the first occurrence of each.
pub fn unique_department_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
