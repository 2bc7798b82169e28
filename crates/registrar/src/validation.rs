//! Field validation for registrations.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. full name, enrollment number, branch and semester are present
//! 2. the email has a `local@domain.tld` shape
//! 3. the phone number is exactly ten digits
//!
//! # Example
//!
//! ```
//! use registrar::validation::{validate, ValidationError};
//! use registrar::FormState;
//!
//! let form = FormState {
//!     full_name: Some("Asha Rao".into()),
//!     enrollment_no: Some("EN2024001".into()),
//!     branch: Some("CSE".into()),
//!     semester: Some("5".into()),
//!     email: Some("asha@example.com".into()),
//!     phone: Some("98765".into()),
//! };
//! let record = form.to_record(1, chrono::Utc::now());
//! assert_eq!(validate(&record), Err(ValidationError::InvalidPhone));
//! ```

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::record::StudentRecord;

/// Pattern for a plausible email address.
///
/// A byte order mark counts as whitespace, as it does for browsers.
pub const EMAIL_PATTERN: &str = r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$";

/// Pattern for a ten digit phone number.
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";

/// Why a registration was rejected.
///
/// The display text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("Please fill in all required fields.")]
    MissingRequiredField,

    /// The email address is malformed.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// The phone number is not ten digits.
    #[error("Phone number must be exactly 10 digits.")]
    InvalidPhone,
}

impl ValidationError {
    /// The user-facing message for this failure.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "Please fill in all required fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::InvalidPhone => "Phone number must be exactly 10 digits.",
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid email pattern"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("Invalid phone pattern"))
}

/// Check whether an email address has a `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Check whether a phone number is exactly ten ASCII digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Validate a candidate record.
///
/// # Errors
///
/// Returns the first failed check, in the order listed in the module docs.
pub fn validate(record: &StudentRecord) -> Result<(), ValidationError> {
    let required = [
        &record.full_name,
        &record.enrollment_no,
        &record.branch,
        &record.semester,
    ];
    if required.iter().any(|field| field.is_empty()) {
        trace!(id = record.id, "rejected: missing required field");
        return Err(ValidationError::MissingRequiredField);
    }

    if !is_valid_email(&record.email) {
        trace!(id = record.id, "rejected: invalid email");
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone(&record.phone) {
        trace!(id = record.id, "rejected: invalid phone");
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_valid(record: &StudentRecord) -> bool {
    validate(record).is_ok()
}
