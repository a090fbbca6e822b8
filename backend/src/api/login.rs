//! Login API handler.
//!
//! ```text
//! POST /api/login {"emailOrMobile":"asha@example.com","password":"pw123"}
//! ```

use actix_web::{post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AuthenticatedUser, LoginForm, RecordKind};

use super::error::ApiResult;
use super::state::AppState;

/// User payload echoed back on a successful login.
///
/// Students carry `department`, alumni carry `currentlyWorkingAs`; the
/// other field is omitted. The password is never echoed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// Store-assigned identity.
    pub id: i64,
    /// Full name.
    pub full_name: String,
    /// College roll number.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Department, for student records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Current occupation, for alumni records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_working_as: Option<String>,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
    /// Record kind discriminator.
    pub user_type: RecordKind,
}

impl From<AuthenticatedUser> for UserPayload {
    fn from(user: AuthenticatedUser) -> Self {
        match user {
            AuthenticatedUser::Student(account) => Self {
                id: account.id,
                full_name: account.full_name,
                roll_no: account.roll_no,
                college_name: account.college_name,
                department: Some(account.department),
                currently_working_as: None,
                address: account.address,
                email_or_mobile: account.email_or_mobile,
                user_type: RecordKind::Student,
            },
            AuthenticatedUser::Alumni(account) => Self {
                id: account.id,
                full_name: account.full_name,
                roll_no: account.roll_no,
                college_name: account.college_name,
                department: None,
                currently_working_as: Some(account.currently_working_as),
                address: account.address,
                email_or_mobile: account.email_or_mobile,
                user_type: RecordKind::Alumni,
            },
        }
    }
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Always `true`; failures use the error envelope instead.
    pub success: bool,
    /// Human-readable confirmation.
    #[schema(example = "Login successful")]
    pub message: String,
    /// The matched record.
    pub user: UserPayload,
}

/// Authenticate a credential pair against stored records.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing credentials", body = crate::api::error::ErrorBody),
        (status = 401, description = "Invalid credentials", body = crate::api::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorBody)
    ),
    tags = ["login"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginForm>,
) -> ApiResult<web::Json<LoginResponse>> {
    let user = state.login.authenticate(payload.into_inner()).await?;
    Ok(web::Json(LoginResponse {
        success: true,
        message: "Login successful".to_owned(),
        user: user.into(),
    }))
}
