//! Login orchestrator.
//!
//! Credential lookup runs against the relational store only; the mirror is
//! never consulted. Validation and authentication failures are deterministic
//! and caller-facing, so they are logged informationally, while store read
//! failures are logged as errors and surface as an internal failure.

use std::sync::Arc;

use tracing::{error, info};

use super::ports::RegistrationRepository;
use super::{AuthenticatedUser, DomainError, LoginForm};

/// Orchestrates the credential-lookup login flow.
#[derive(Clone)]
pub struct LoginService {
    repository: Arc<dyn RegistrationRepository>,
}

impl LoginService {
    /// Create a service reading from `repository`.
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    /// Authenticate a login submission.
    ///
    /// # Errors
    /// - [`DomainError::invalid_request`] when either credential key is
    ///   absent from the body.
    /// - [`DomainError::unauthorized`] when no record matches.
    /// - [`DomainError::internal`] when the lookup itself fails.
    pub async fn authenticate(&self, form: LoginForm) -> Result<AuthenticatedUser, DomainError> {
        let credentials = form
            .validate()
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;

        let matched = self
            .repository
            .find_by_credentials(&credentials.email_or_mobile, &credentials.password)
            .await
            .map_err(|err| {
                error!(error = %err, "login lookup failed");
                DomainError::internal(err.to_string())
            })?;

        match matched {
            Some(user) => {
                info!(kind = %user.kind(), "login successful");
                Ok(user)
            }
            None => {
                info!("login rejected: no matching credentials");
                Err(DomainError::unauthorized("Invalid email/mobile or password"))
            }
        }
    }
}
