//! Field checks run before an intent reaches the store.

use thiserror::Error;

use crate::api::{Credentials, Registration};
use crate::model::{NoteDraft, ProfileUpdate, Secret};

pub const MIN_PASSWORD_LEN: usize = 8;

/// A rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require("Email", email)?;
    let email = email.trim();
    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    };
    if !valid {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

fn validate_new_password(password: &Secret) -> Result<(), ValidationError> {
    require("Password", password.expose())?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    validate_email(&credentials.email)?;
    require("Password", credentials.password.expose())
}

pub fn validate_registration(registration: &Registration) -> Result<(), ValidationError> {
    require("Name", &registration.name)?;
    validate_email(&registration.email)?;
    validate_new_password(&registration.password)
}

/// The password is only checked when it is being changed.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), ValidationError> {
    require("Name", &update.name)?;
    match &update.password {
        Some(password) => validate_new_password(password),
        None => Ok(()),
    }
}

pub fn validate_note_draft(draft: &NoteDraft) -> Result<(), ValidationError> {
    require("Title", &draft.title)
}
