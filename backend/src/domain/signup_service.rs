//! Signup orchestrator.
//!
//! Each signup validates the submission, then writes to the relational store
//! and the document mirror independently. Store failures are logged and
//! reported as a null id in the outcome; once validation has passed the call
//! itself succeeds regardless of persistence results. That tolerance is the
//! platform's existing contract, preserved deliberately.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::ports::{RegistrationMirror, RegistrationRepository};
use super::{AlumniSignupForm, DomainError, RecordKind, StudentSignupForm};

/// Per-store outcome of a signup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    /// Kind of record that was registered.
    pub kind: RecordKind,
    /// Relational store identity, or `None` when that write failed.
    pub sqlite_id: Option<i64>,
    /// Mirror document identity, or `None` when the mirror is absent or the
    /// write failed.
    pub mirror_id: Option<String>,
}

/// Orchestrates the dual-write signup flow.
#[derive(Clone)]
pub struct SignupService {
    repository: Arc<dyn RegistrationRepository>,
    mirror: Option<Arc<dyn RegistrationMirror>>,
}

impl SignupService {
    /// Create a service writing to `repository` and, when present, `mirror`.
    pub fn new(
        repository: Arc<dyn RegistrationRepository>,
        mirror: Option<Arc<dyn RegistrationMirror>>,
    ) -> Self {
        Self { repository, mirror }
    }

    /// Register a student submission.
    ///
    /// # Errors
    /// Returns [`DomainError::invalid_request`] naming the first missing
    /// field. No store is written when validation fails.
    pub async fn register_student(
        &self,
        form: StudentSignupForm,
    ) -> Result<SignupOutcome, DomainError> {
        let registration = form
            .validate()
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;

        let sqlite_id = match self.repository.insert_student(&registration).await {
            Ok(id) => {
                info!(id, "student saved to sqlite");
                Some(id)
            }
            Err(err) => {
                error!(error = %err, "sqlite student insert failed");
                None
            }
        };

        let mirror_id = match &self.mirror {
            Some(mirror) => match mirror.mirror_student(&registration).await {
                Ok(id) => {
                    info!(%id, "student mirrored");
                    Some(id)
                }
                Err(err) => {
                    warn!(error = %err, "student mirror write failed");
                    None
                }
            },
            None => None,
        };

        Ok(SignupOutcome {
            kind: RecordKind::Student,
            sqlite_id,
            mirror_id,
        })
    }

    /// Register an alumni submission.
    ///
    /// # Errors
    /// Returns [`DomainError::invalid_request`] naming the first missing
    /// field. No store is written when validation fails.
    pub async fn register_alumni(
        &self,
        form: AlumniSignupForm,
    ) -> Result<SignupOutcome, DomainError> {
        let registration = form
            .validate()
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;

        let sqlite_id = match self.repository.insert_alumni(&registration).await {
            Ok(id) => {
                info!(id, "alumni saved to sqlite");
                Some(id)
            }
            Err(err) => {
                error!(error = %err, "sqlite alumni insert failed");
                None
            }
        };

        let mirror_id = match &self.mirror {
            Some(mirror) => match mirror.mirror_alumni(&registration).await {
                Ok(id) => {
                    info!(%id, "alumni mirrored");
                    Some(id)
                }
                Err(err) => {
                    warn!(error = %err, "alumni mirror write failed");
                    None
                }
            },
            None => None,
        };

        Ok(SignupOutcome {
            kind: RecordKind::Alumni,
            sqlite_id,
            mirror_id,
        })
    }
}
