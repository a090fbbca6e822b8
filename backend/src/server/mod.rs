//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, header};
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use tracing::{info, warn};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::api::health::health;
use crate::api::login::login;
use crate::api::signup::{signup_alumni, signup_student};
use crate::api::state::AppState;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{RegistrationMirror, RegistrationRepository};
use crate::domain::{LoginService, SignupService};
use crate::outbound::mirror::RedisRegistrationMirror;
use crate::outbound::persistence::{DieselRegistrationRepository, SqliteDatabase};

/// Answer OPTIONS preflights under `/api` with an empty 200; anything else
/// unmatched falls through to a 404.
async fn api_fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, GET, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

/// Assemble the application with all API routes and CORS headers.
///
/// Exposed so integration tests can drive the exact production routing
/// through `actix_web::test::init_service`.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .wrap(cors_headers())
        .service(signup_student)
        .service(signup_alumni)
        .service(login)
        .service(health)
        .default_service(web::route().to(api_fallback));

    let mut app = App::new().app_data(state).service(api);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Construct the shared application state from configuration.
///
/// The relational store is the system of record: its schema bootstrap must
/// succeed or the server refuses to start. The mirror is optional; a failed
/// connection degrades to running without it.
///
/// # Errors
/// Propagates [`std::io::Error`] when the schema bootstrap fails.
pub async fn build_state(config: &ServerConfig) -> std::io::Result<web::Data<AppState>> {
    let database = SqliteDatabase::new(config.database_path());
    database
        .ensure_schema()
        .map_err(|err| std::io::Error::other(format!("schema bootstrap failed: {err}")))?;
    info!(path = config.database_path(), "sqlite schema ready");

    let mirror: Option<Arc<dyn RegistrationMirror>> = match &config.mirror_url {
        Some(url) => match RedisRegistrationMirror::connect(url).await {
            Ok(mirror) => {
                info!(url, "document mirror connected");
                Some(Arc::new(mirror))
            }
            Err(err) => {
                warn!(url, error = %err, "document mirror unavailable; continuing without it");
                None
            }
        },
        None => None,
    };

    let repository: Arc<dyn RegistrationRepository> =
        Arc::new(DieselRegistrationRepository::new(database));
    let mirror_enabled = mirror.is_some();

    Ok(web::Data::new(AppState::new(
        SignupService::new(repository.clone(), mirror),
        LoginService::new(repository),
        mirror_enabled,
    )))
}

/// Construct an Actix HTTP server from the configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when the schema bootstrap or socket
/// binding fails.
pub async fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = build_state(&config).await?;

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run();

    Ok(server)
}
