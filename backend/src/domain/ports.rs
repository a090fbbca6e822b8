//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the orchestrators expect to interact with driven
//! adapters. Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of stringly-typed results.

use async_trait::async_trait;
use thiserror::Error;

use super::{AlumniRegistration, AuthenticatedUser, StudentRegistration};

/// Errors surfaced by the relational store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorePersistenceError {
    /// Connection could not be established.
    #[error("registry connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query or insert failed during execution.
    #[error("registry query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl StorePersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Errors surfaced by the document mirror adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MirrorError {
    /// Mirror backend is unavailable or rejected the write.
    #[error("mirror backend failure: {message}")]
    Backend {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Serialisation of the mirrored document failed.
    #[error("mirror serialisation failed: {message}")]
    Serialization {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl MirrorError {
    /// Helper for backend-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Helper for serialisation problems.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Persistence port for the relational system of record.
///
/// Inserts return the store-assigned integer identity. The credential lookup
/// checks students before alumni; that order is part of the contract.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persist a student registration and return its new row id.
    async fn insert_student(
        &self,
        registration: &StudentRegistration,
    ) -> Result<i64, StorePersistenceError>;

    /// Persist an alumni registration and return its new row id.
    async fn insert_alumni(
        &self,
        registration: &AlumniRegistration,
    ) -> Result<i64, StorePersistenceError>;

    /// Find the first record matching the credential pair exactly.
    ///
    /// Students are always checked before alumni. `Ok(None)` means no match;
    /// it is not an error.
    async fn find_by_credentials(
        &self,
        email_or_mobile: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>, StorePersistenceError>;
}

/// Best-effort document mirror for signups.
///
/// The mirror is never consulted during login. Failures here must never
/// change a signup's reported outcome; the orchestrator logs and continues.
#[async_trait]
pub trait RegistrationMirror: Send + Sync {
    /// Mirror a student registration, returning the opaque document id.
    async fn mirror_student(
        &self,
        registration: &StudentRegistration,
    ) -> Result<String, MirrorError>;

    /// Mirror an alumni registration, returning the opaque document id.
    async fn mirror_alumni(&self, registration: &AlumniRegistration)
    -> Result<String, MirrorError>;
}
