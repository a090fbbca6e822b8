//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) database_path: String,
    pub(crate) mirror_url: Option<String>,
}

impl ServerConfig {
    /// Construct a configuration with the relational store at
    /// `database_path` and no mirror.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, database_path: impl Into<String>) -> Self {
        Self {
            bind_addr,
            database_path: database_path.into(),
            mirror_url: None,
        }
    }

    /// Attach a Redis URL for the best-effort document mirror.
    ///
    /// An unreachable mirror does not prevent startup; the server degrades
    /// to the relational store alone.
    #[must_use]
    pub fn with_mirror_url(mut self, url: impl Into<String>) -> Self {
        self.mirror_url = Some(url.into());
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the relational store path.
    #[must_use]
    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}
