//! Transport-agnostic domain core: registration model, validation, and the
//! signup/login orchestrators.

mod error;
mod login_service;
pub mod ports;
mod registration;
mod signup_service;
pub mod validation;

pub use error::{DomainError, ErrorCode};
pub use login_service::LoginService;
pub use registration::{
    AlumniAccount, AlumniRegistration, AlumniSignupForm, AuthenticatedUser, Credentials,
    LoginForm, LoginValidationError, RecordKind, SignupValidationError, StudentAccount,
    StudentRegistration, StudentSignupForm,
};
pub use signup_service::{SignupOutcome, SignupService};
