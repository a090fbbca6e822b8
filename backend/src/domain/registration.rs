//! Registration data model.
//!
//! Two record kinds exist: students and alumni. They share the same shape
//! except that students carry a `department` and alumni a
//! `currentlyWorkingAs` occupation. Signup submissions arrive as forms with
//! every field optional; [`StudentSignupForm::validate`] and
//! [`AlumniSignupForm::validate`] turn a form into a validated registration
//! or name the first missing field.
//!
//! Credentials are stored and compared verbatim. That mirrors the platform's
//! existing contract and is a known weakness, not an oversight.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::validation::first_missing;

/// Discriminator distinguishing a student registration from an alumni one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A current student record.
    Student,
    /// An alumni record.
    Alumni,
}

impl RecordKind {
    /// Wire-level name of the kind, as used in the `userType` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Alumni => "alumni",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised when checking a signup form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupValidationError {
    /// A required field was absent, null, or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Raw student signup submission; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentSignupForm {
    /// Full name of the student.
    pub full_name: Option<String>,
    /// College roll number.
    pub roll_no: Option<String>,
    /// Name of the college.
    pub college_name: Option<String>,
    /// Department the student is enrolled in.
    pub department: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Email address or mobile number; doubles as the login key.
    pub email_or_mobile: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl StudentSignupForm {
    fn fields(&self) -> [(&'static str, Option<&String>); 7] {
        [
            ("fullName", self.full_name.as_ref()),
            ("rollNo", self.roll_no.as_ref()),
            ("collegeName", self.college_name.as_ref()),
            ("department", self.department.as_ref()),
            ("address", self.address.as_ref()),
            ("emailOrMobile", self.email_or_mobile.as_ref()),
            ("password", self.password.as_ref()),
        ]
    }

    /// Check all required fields and produce a validated registration.
    pub fn validate(self) -> Result<StudentRegistration, SignupValidationError> {
        if let Some(name) = first_missing(&self.fields()) {
            return Err(SignupValidationError::MissingField(name));
        }
        let Self {
            full_name,
            roll_no,
            college_name,
            department,
            address,
            email_or_mobile,
            password,
        } = self;
        Ok(StudentRegistration {
            full_name: full_name.unwrap_or_default(),
            roll_no: roll_no.unwrap_or_default(),
            college_name: college_name.unwrap_or_default(),
            department: department.unwrap_or_default(),
            address: address.unwrap_or_default(),
            email_or_mobile: email_or_mobile.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

/// Raw alumni signup submission; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AlumniSignupForm {
    /// Full name of the alumnus or alumna.
    pub full_name: Option<String>,
    /// College roll number held while studying.
    pub roll_no: Option<String>,
    /// Name of the college.
    pub college_name: Option<String>,
    /// Current occupation.
    pub currently_working_as: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Email address or mobile number; doubles as the login key.
    pub email_or_mobile: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl AlumniSignupForm {
    fn fields(&self) -> [(&'static str, Option<&String>); 7] {
        [
            ("fullName", self.full_name.as_ref()),
            ("rollNo", self.roll_no.as_ref()),
            ("collegeName", self.college_name.as_ref()),
            ("currentlyWorkingAs", self.currently_working_as.as_ref()),
            ("address", self.address.as_ref()),
            ("emailOrMobile", self.email_or_mobile.as_ref()),
            ("password", self.password.as_ref()),
        ]
    }

    /// Check all required fields and produce a validated registration.
    pub fn validate(self) -> Result<AlumniRegistration, SignupValidationError> {
        if let Some(name) = first_missing(&self.fields()) {
            return Err(SignupValidationError::MissingField(name));
        }
        let Self {
            full_name,
            roll_no,
            college_name,
            currently_working_as,
            address,
            email_or_mobile,
            password,
        } = self;
        Ok(AlumniRegistration {
            full_name: full_name.unwrap_or_default(),
            roll_no: roll_no.unwrap_or_default(),
            college_name: college_name.unwrap_or_default(),
            currently_working_as: currently_working_as.unwrap_or_default(),
            address: address.unwrap_or_default(),
            email_or_mobile: email_or_mobile.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

/// A validated student registration ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRegistration {
    /// Full name of the student.
    pub full_name: String,
    /// College roll number.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Department the student is enrolled in.
    pub department: String,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
    /// Plaintext password, stored verbatim.
    pub password: String,
}

/// A validated alumni registration ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumniRegistration {
    /// Full name of the alumnus or alumna.
    pub full_name: String,
    /// College roll number held while studying.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Current occupation.
    pub currently_working_as: String,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
    /// Plaintext password, stored verbatim.
    pub password: String,
}

/// Stored student record as projected for a successful login.
///
/// The password and creation timestamp are never echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentAccount {
    /// Store-assigned identity.
    pub id: i64,
    /// Full name of the student.
    pub full_name: String,
    /// College roll number.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Department the student is enrolled in.
    pub department: String,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
}

/// Stored alumni record as projected for a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumniAccount {
    /// Store-assigned identity.
    pub id: i64,
    /// Full name of the alumnus or alumna.
    pub full_name: String,
    /// College roll number held while studying.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Current occupation.
    pub currently_working_as: String,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
}

/// The record matched by a credential lookup, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticatedUser {
    /// A matching row from the students table.
    Student(StudentAccount),
    /// A matching row from the alumni table.
    Alumni(AlumniAccount),
}

impl AuthenticatedUser {
    /// Record kind of the matched row.
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Student(_) => RecordKind::Student,
            Self::Alumni(_) => RecordKind::Alumni,
        }
    }
}

/// Validation failures raised when checking a login submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// The login key or the password key was absent from the body.
    #[error("Email/Mobile and password are required")]
    MissingCredentials,
}

/// Raw login submission; both fields may be absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    /// Email address or mobile number used at signup.
    pub email_or_mobile: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl LoginForm {
    /// Require both keys to be present.
    ///
    /// Presence is all that is checked: an empty string passes through and
    /// simply fails to match any stored record downstream.
    pub fn validate(self) -> Result<Credentials, LoginValidationError> {
        let Self {
            email_or_mobile: Some(email_or_mobile),
            password: Some(password),
        } = self
        else {
            return Err(LoginValidationError::MissingCredentials);
        };
        Ok(Credentials {
            email_or_mobile,
            password,
        })
    }
}

/// A credential pair used for the login lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Email address or mobile number used at signup.
    pub email_or_mobile: String,
    /// Plaintext password compared for exact equality.
    pub password: String,
}
