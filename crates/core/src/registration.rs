//! Duplicate guard helpers for doctor registration.
//!
//! A doctor is identified for duplicate purposes by email OR registration
//! number: a collision on either blocks creation.

use crate::error::CoreError;

/// Message used for the `Conflict` raised by `start_onboarding`.
pub const DUPLICATE_REGISTRATION_MSG: &str =
    "A doctor with this email or registration number is already registered";

/// Lookup key for registration matching. At least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationKey {
    pub email: Option<String>,
    pub register_no: Option<String>,
}

impl RegistrationKey {
    /// Build a key from optional query arguments.
    ///
    /// Blank values count as not given. Returns `None` when neither field
    /// is usable, in which case callers report no matches.
    pub fn lookup(email: Option<&str>, register_no: Option<&str>) -> Option<Self> {
        let email = non_blank(email);
        let register_no = non_blank(register_no);
        if email.is_none() && register_no.is_none() {
            return None;
        }
        Some(Self { email, register_no })
    }

    /// Key for a brand-new registration, where both fields are required.
    pub fn for_new_doctor(register_no: &str, email: &str) -> Result<Self, CoreError> {
        validate_new_registration(register_no, email)?;
        Ok(Self {
            email: Some(email.to_string()),
            register_no: Some(register_no.to_string()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Reject blank registration keys. The values are otherwise stored as given.
pub fn validate_new_registration(register_no: &str, email: &str) -> Result<(), CoreError> {
    if register_no.trim().is_empty() {
        return Err(CoreError::Validation(
            "Registration number must not be blank".to_string(),
        ));
    }
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Email must not be blank".to_string()));
    }
    Ok(())
}

/// Fail with `Conflict` when an existing doctor matched the key.
pub fn ensure_not_registered(already_registered: bool) -> Result<(), CoreError> {
    if already_registered {
        return Err(CoreError::Conflict(DUPLICATE_REGISTRATION_MSG.to_string()));
    }
    Ok(())
}
