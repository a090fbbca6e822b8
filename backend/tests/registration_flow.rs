//! End-to-end HTTP tests for the signup and login flows.
//!
//! These drive the production routing from `server::build_app` against a
//! real SQLite database in a temporary directory, so the full path from
//! JSON body to store row and back is exercised.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
use actix_web::web;
use async_trait::async_trait;
use serde_json::{Value, json};

use alumni_backend::api::AppState;
use alumni_backend::domain::ports::{MirrorError, RegistrationMirror};
use alumni_backend::domain::{
    AlumniRegistration, LoginService, SignupService, StudentRegistration,
};
use alumni_backend::outbound::persistence::{DieselRegistrationRepository, SqliteDatabase};
use alumni_backend::server::build_app;

struct UnreachableMirror;

#[async_trait]
impl RegistrationMirror for UnreachableMirror {
    async fn mirror_student(
        &self,
        _registration: &StudentRegistration,
    ) -> Result<String, MirrorError> {
        Err(MirrorError::backend("connection refused"))
    }

    async fn mirror_alumni(
        &self,
        _registration: &AlumniRegistration,
    ) -> Result<String, MirrorError> {
        Err(MirrorError::backend("connection refused"))
    }
}

fn temp_state(
    mirror: Option<Arc<dyn RegistrationMirror>>,
) -> (tempfile::TempDir, web::Data<AppState>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("alumni_platform.db");
    let database = SqliteDatabase::new(path.to_string_lossy());
    database.ensure_schema().expect("schema bootstrap");

    let repository = Arc::new(DieselRegistrationRepository::new(database));
    let mirror_enabled = mirror.is_some();
    let state = web::Data::new(AppState::new(
        SignupService::new(repository.clone(), mirror),
        LoginService::new(repository),
        mirror_enabled,
    ));
    (dir, state)
}

fn asha_signup() -> Value {
    json!({
        "fullName": "Asha Rao",
        "rollNo": "21CS01",
        "collegeName": "ABC College",
        "department": "CS",
        "address": "Pune",
        "emailOrMobile": "asha@example.com",
        "password": "pw123"
    })
}

fn ravi_signup() -> Value {
    json!({
        "fullName": "Ravi Kumar",
        "rollNo": "17EC42",
        "collegeName": "ABC College",
        "currentlyWorkingAs": "Firmware Engineer",
        "address": "Bengaluru",
        "emailOrMobile": "ravi@example.com",
        "password": "hunter2"
    })
}

fn post(uri: &str, body: &Value) -> actix_http::Request {
    TestRequest::post().uri(uri).set_json(body).to_request()
}

#[actix_web::test]
async fn student_signup_then_login_round_trips() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let response = call_service(&app, post("/api/signup/student", &asha_signup())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Student registered successfully");
    assert_eq!(body["sqliteId"], 1);
    assert!(body["mirrorId"].is_null());

    let login_body = json!({"emailOrMobile": "asha@example.com", "password": "pw123"});
    let response = call_service(&app, post("/api/login", &login_body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["fullName"], "Asha Rao");
    assert_eq!(body["user"]["rollNo"], "21CS01");
    assert_eq!(body["user"]["collegeName"], "ABC College");
    assert_eq!(body["user"]["department"], "CS");
    assert_eq!(body["user"]["address"], "Pune");
    assert_eq!(body["user"]["emailOrMobile"], "asha@example.com");
    assert_eq!(body["user"]["userType"], "student");
    assert!(body["user"].get("password").is_none());
}

#[actix_web::test]
async fn alumni_signup_then_login_reports_alumni_kind() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let response = call_service(&app, post("/api/signup/alumni", &ravi_signup())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["message"], "Alumni registered successfully");
    assert_eq!(body["sqliteId"], 1);

    let login_body = json!({"emailOrMobile": "ravi@example.com", "password": "hunter2"});
    let response = call_service(&app, post("/api/login", &login_body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["user"]["userType"], "alumni");
    assert_eq!(body["user"]["currentlyWorkingAs"], "Firmware Engineer");
    assert!(body["user"].get("department").is_none());
}

#[actix_web::test]
async fn wrong_password_is_unauthorized() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let response = call_service(&app, post("/api/signup/student", &asha_signup())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let login_body = json!({"emailOrMobile": "asha@example.com", "password": "wrong"});
    let response = call_service(&app, post("/api/login", &login_body)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["error"], "Invalid email/mobile or password");
}

#[actix_web::test]
async fn missing_field_is_rejected_with_no_store_writes() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let mut incomplete = asha_signup();
    incomplete
        .as_object_mut()
        .expect("object body")
        .remove("department");
    let response = call_service(&app, post("/api/signup/student", &incomplete)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["error"], "Missing required field: department");

    // Nothing was written: the credentials cannot log in.
    let login_body = json!({"emailOrMobile": "asha@example.com", "password": "pw123"});
    let response = call_service(&app, post("/api/login", &login_body)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn empty_field_is_treated_as_missing() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let mut body = ravi_signup();
    body.as_object_mut()
        .expect("object body")
        .insert("currentlyWorkingAs".to_owned(), json!(""));
    let response = call_service(&app, post("/api/signup/alumni", &body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["error"], "Missing required field: currentlyWorkingAs");
}

#[actix_web::test]
async fn missing_login_credentials_are_a_client_error() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let response = call_service(
        &app,
        post("/api/login", &json!({"emailOrMobile": "asha@example.com"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["error"], "Email/Mobile and password are required");
}

#[actix_web::test]
async fn login_prefers_students_over_alumni() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let mut alumni_body = ravi_signup();
    let alumni_map = alumni_body.as_object_mut().expect("object body");
    alumni_map.insert("emailOrMobile".to_owned(), json!("shared@example.com"));
    alumni_map.insert("password".to_owned(), json!("pw"));
    let response = call_service(&app, post("/api/signup/alumni", &alumni_body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut student_body = asha_signup();
    let student_map = student_body.as_object_mut().expect("object body");
    student_map.insert("emailOrMobile".to_owned(), json!("shared@example.com"));
    student_map.insert("password".to_owned(), json!("pw"));
    let response = call_service(&app, post("/api/signup/student", &student_body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let login_body = json!({"emailOrMobile": "shared@example.com", "password": "pw"});
    let response = call_service(&app, post("/api/login", &login_body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["user"]["userType"], "student");
}

#[actix_web::test]
async fn failing_mirror_does_not_change_signup_success() {
    let (_dir, state) = temp_state(Some(Arc::new(UnreachableMirror)));
    let app = init_service(build_app(state)).await;

    let response = call_service(&app, post("/api/signup/student", &asha_signup())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["sqliteId"], 1);
    assert!(body["mirrorId"].is_null());
}

#[actix_web::test]
async fn health_reports_store_connectivity() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let response = call_service(&app, TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["sqlite"], "connected");
    assert_eq!(body["mirror"], "disconnected");
    assert!(body["timestamp"].as_str().is_some_and(|s| !s.is_empty()));
}

#[actix_web::test]
async fn api_responses_carry_cors_headers() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let response = call_service(&app, post("/api/signup/student", &asha_signup())).await;
    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok()),
        Some("POST, GET, OPTIONS")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|v| v.to_str().ok()),
        Some("Content-Type")
    );
}

#[actix_web::test]
async fn options_preflight_returns_empty_ok() {
    let (_dir, state) = temp_state(None);
    let app = init_service(build_app(state)).await;

    let request = TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/signup/student")
        .to_request();
    let response = call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body = actix_web::test::read_body(response).await;
    assert!(body.is_empty());
}
