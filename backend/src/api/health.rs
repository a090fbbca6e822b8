//! Health endpoint reporting per-store connectivity.

use actix_web::{get, web};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::state::AppState;

/// Health report for orchestration and manual checks.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status.
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Relational store connectivity.
    #[schema(example = "connected")]
    pub sqlite: &'static str,
    /// Document mirror connectivity.
    #[schema(example = "disconnected")]
    pub mirror: &'static str,
    /// RFC 3339 timestamp of the report.
    pub timestamp: String,
}

/// Report service and store status.
///
/// The relational store is required at startup, so a serving process always
/// reports it connected; the mirror reflects whether it was reachable when
/// the server started.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service health", body = HealthResponse)),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy",
        sqlite: "connected",
        mirror: if state.mirror_enabled {
            "connected"
        } else {
            "disconnected"
        },
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
