//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain orchestrators and remain testable without I/O.

use crate::domain::{LoginService, SignupService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dual-write signup orchestrator.
    pub signup: SignupService,
    /// Credential-lookup login orchestrator.
    pub login: LoginService,
    /// Whether the document mirror was reachable at startup.
    pub mirror_enabled: bool,
}

impl AppState {
    /// Bundle the orchestrators for handler injection.
    pub const fn new(signup: SignupService, login: LoginService, mirror_enabled: bool) -> Self {
        Self {
            signup,
            login,
            mirror_enabled,
        }
    }
}
