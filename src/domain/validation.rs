//! Required-field and e-mail shape checks run before a submission starts.

use thiserror::Error;

use super::draft_message::{DraftMessage, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("Please fill out the \"{}\" field.", .0.placeholder())]
    Missing(FormField),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl FormValidationError {
    /// Field that should take focus so the user can fix it.
    pub fn field(self) -> FormField {
        match self {
            Self::Missing(field) => field,
            Self::InvalidEmail => FormField::Email,
        }
    }
}

/// Checks fields in form order and reports the first problem.
pub fn validate(draft: &DraftMessage) -> Result<(), FormValidationError> {
    for field in FormField::ALL {
        if draft.value(field).trim().is_empty() {
            return Err(FormValidationError::Missing(field));
        }
    }

    if !is_valid_email(draft.value(FormField::Email).trim()) {
        return Err(FormValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }

    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        })
}
