//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the OpenAPI description of the REST API. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::api::error::ErrorBody;
use crate::api::health::HealthResponse;
use crate::api::login::{LoginResponse, UserPayload};
use crate::api::signup::SignupResponse;
use crate::domain::{AlumniSignupForm, LoginForm, RecordKind, StudentSignupForm};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alumni platform backend API",
        description = "Registration and login endpoints for the alumni platform."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::signup::signup_student,
        crate::api::signup::signup_alumni,
        crate::api::login::login,
        crate::api::health::health,
    ),
    components(schemas(
        StudentSignupForm,
        AlumniSignupForm,
        LoginForm,
        RecordKind,
        SignupResponse,
        LoginResponse,
        UserPayload,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "signup", description = "Student and alumni registration"),
        (name = "login", description = "Credential validation"),
        (name = "health", description = "Service health checks")
    )
)]
pub struct ApiDoc;
