//! Core registration types for registrar.
//!
//! This module defines the student record as it is persisted, the form
//! state a submission is read from, and the fixed option sets the form
//! offers for branch and semester.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Academic branches offered by the registration form.
///
/// Records store the branch as its [`code`](Branch::code) string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Computer Science and Engineering.
    Cse,
    /// Information Technology.
    It,
    /// Electronics and Communication Engineering.
    Ece,
    /// Electrical and Electronics Engineering.
    Eee,
    /// Mechanical Engineering.
    Me,
    /// Civil Engineering.
    Ce,
}

impl Branch {
    /// The stored form of this branch.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::It => "IT",
            Self::Ece => "ECE",
            Self::Eee => "EEE",
            Self::Me => "ME",
            Self::Ce => "CE",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Semesters offered by the registration form.
pub const SEMESTERS: std::ops::RangeInclusive<u8> = 1..=8;

/// A persisted student registration.
///
/// Field names on the wire match the browser application's storage entry,
/// so entries it wrote load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Identifier assigned at creation.
    pub id: i64,

    /// Student's full name.
    pub full_name: String,

    /// Enrollment number.
    pub enrollment_no: String,

    /// Academic branch code.
    pub branch: String,

    /// Semester number, as text.
    pub semester: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// When the registration was submitted.
    #[serde(rename = "timestamp", with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

/// The registration form's current input.
///
/// `None` and an empty string are equivalent: both mean the field was left
/// blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Full name input.
    pub full_name: Option<String>,
    /// Enrollment number input.
    pub enrollment_no: Option<String>,
    /// Selected branch.
    pub branch: Option<String>,
    /// Selected semester.
    pub semester: Option<String>,
    /// Email input.
    pub email: Option<String>,
    /// Phone input.
    pub phone: Option<String>,
}

impl FormState {
    /// Build a candidate record from the form's current values.
    ///
    /// Text inputs are trimmed; the select values are taken as they are.
    #[must_use]
    pub fn to_record(&self, id: i64, created_at: DateTime<Utc>) -> StudentRecord {
        StudentRecord {
            id,
            full_name: trimmed(self.full_name.as_deref()),
            enrollment_no: trimmed(self.enrollment_no.as_deref()),
            branch: self.branch.clone().unwrap_or_default(),
            semester: self.semester.clone().unwrap_or_default(),
            email: trimmed(self.email.as_deref()),
            phone: trimmed(self.phone.as_deref()),
            created_at,
        }
    }

    /// Clear every field back to blank.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Byte order mark; browsers count it as whitespace when trimming inputs.
const BOM: char = '\u{feff}';

fn trimmed(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_string()
}

/// Timestamps in the `toISOString` shape: millisecond precision, `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
