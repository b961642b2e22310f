//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Write helpers shared between
//! repositories take an open transaction instead and are crate-private.

pub mod address_repo;
pub mod appointment_settings_repo;
pub mod department_repo;
pub mod doctor_aggregate_repo;
pub mod doctor_repo;
pub mod mobile_number_repo;
pub mod onboarding_repo;
pub mod qualification_repo;
pub mod schedule_repo;

pub use address_repo::AddressRepo;
pub use appointment_settings_repo::AppointmentSettingsRepo;
pub use department_repo::DepartmentRepo;
pub use doctor_aggregate_repo::DoctorAggregateRepo;
pub use doctor_repo::DoctorRepo;
pub use mobile_number_repo::MobileNumberRepo;
pub use onboarding_repo::OnboardingRepo;
pub use qualification_repo::QualificationRepo;
pub use schedule_repo::ScheduleRepo;
