//! Backend entry-point: configuration, tracing, and server startup.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use alumni_backend::server::{ServerConfig, create_server};

const DEFAULT_DATABASE: &str = "alumni_platform.db";
const DEFAULT_MIRROR_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_PORT: u16 = 3000;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_path = env::var("ALUMNI_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_owned());
    let mirror_url = env::var("MIRROR_URL").unwrap_or_else(|_| DEFAULT_MIRROR_URL.to_owned());
    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    info!(
        %bind_addr,
        database = %database_path,
        mirror = %mirror_url,
        "starting alumni platform backend"
    );

    let config = ServerConfig::new(bind_addr, database_path).with_mirror_url(mirror_url);
    create_server(config).await?.await
}
