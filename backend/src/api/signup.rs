//! Signup API handlers.
//!
//! ```text
//! POST /api/signup/student {"fullName":"Asha Rao","rollNo":"21CS01",...}
//! POST /api/signup/alumni  {"fullName":"Ravi Kumar","currentlyWorkingAs":"...",...}
//! ```

use actix_web::{post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AlumniSignupForm, RecordKind, SignupOutcome, StudentSignupForm};

use super::error::ApiResult;
use super::state::AppState;

/// Response body for a signup that passed validation.
///
/// Per-store ids are `null` when the corresponding write failed or the
/// mirror is absent; the call still reports success once validation passes.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    /// Always `true`; failures use the error envelope instead.
    pub success: bool,
    /// Human-readable confirmation.
    #[schema(example = "Student registered successfully")]
    pub message: String,
    /// Relational store identity, or `null` when that write failed.
    pub sqlite_id: Option<i64>,
    /// Mirror document identity, or `null` when unavailable.
    pub mirror_id: Option<String>,
}

impl From<SignupOutcome> for SignupResponse {
    fn from(outcome: SignupOutcome) -> Self {
        let message = match outcome.kind {
            RecordKind::Student => "Student registered successfully",
            RecordKind::Alumni => "Alumni registered successfully",
        };
        Self {
            success: true,
            message: message.to_owned(),
            sqlite_id: outcome.sqlite_id,
            mirror_id: outcome.mirror_id,
        }
    }
}

/// Register a student.
#[utoipa::path(
    post,
    path = "/api/signup/student",
    request_body = StudentSignupForm,
    responses(
        (status = 200, description = "Registration accepted", body = SignupResponse),
        (status = 400, description = "Missing required field", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tags = ["signup"],
    operation_id = "signupStudent"
)]
#[post("/signup/student")]
pub async fn signup_student(
    state: web::Data<AppState>,
    payload: web::Json<StudentSignupForm>,
) -> ApiResult<web::Json<SignupResponse>> {
    let outcome = state.signup.register_student(payload.into_inner()).await?;
    Ok(web::Json(SignupResponse::from(outcome)))
}

/// Register an alumnus or alumna.
#[utoipa::path(
    post,
    path = "/api/signup/alumni",
    request_body = AlumniSignupForm,
    responses(
        (status = 200, description = "Registration accepted", body = SignupResponse),
        (status = 400, description = "Missing required field", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tags = ["signup"],
    operation_id = "signupAlumni"
)]
#[post("/signup/alumni")]
pub async fn signup_alumni(
    state: web::Data<AppState>,
    payload: web::Json<AlumniSignupForm>,
) -> ApiResult<web::Json<SignupResponse>> {
    let outcome = state.signup.register_alumni(payload.into_inner()).await?;
    Ok(web::Json(SignupResponse::from(outcome)))
}
