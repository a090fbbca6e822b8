//! Redis-backed document mirror for signups.
//!
//! Each registration is serialised to a JSON document and stored under a
//! namespaced key (`students:<uuid>` / `alumni:<uuid>`). The mirror is best
//! effort: the server starts without it when the initial connection fails,
//! and individual write failures are logged by the orchestrator without
//! affecting the signup outcome.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::{RedisConnectionManager, bb8, redis};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::ports::{MirrorError, RegistrationMirror};
use crate::domain::{AlumniRegistration, RecordKind, StudentRegistration};

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
const POOL_SIZE: u32 = 4;

/// Mirror adapter writing JSON documents to Redis via a `bb8` pool.
#[derive(Clone, Debug)]
pub struct RedisRegistrationMirror {
    pool: bb8::Pool<RedisConnectionManager>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StudentDocument<'a> {
    full_name: &'a str,
    roll_no: &'a str,
    college_name: &'a str,
    department: &'a str,
    address: &'a str,
    email_or_mobile: &'a str,
    password: &'a str,
    user_type: RecordKind,
    created_at: String,
}

impl<'a> From<&'a StudentRegistration> for StudentDocument<'a> {
    fn from(registration: &'a StudentRegistration) -> Self {
        Self {
            full_name: &registration.full_name,
            roll_no: &registration.roll_no,
            college_name: &registration.college_name,
            department: &registration.department,
            address: &registration.address,
            email_or_mobile: &registration.email_or_mobile,
            password: &registration.password,
            user_type: RecordKind::Student,
            created_at: timestamp(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlumniDocument<'a> {
    full_name: &'a str,
    roll_no: &'a str,
    college_name: &'a str,
    currently_working_as: &'a str,
    address: &'a str,
    email_or_mobile: &'a str,
    password: &'a str,
    user_type: RecordKind,
    created_at: String,
}

impl<'a> From<&'a AlumniRegistration> for AlumniDocument<'a> {
    fn from(registration: &'a AlumniRegistration) -> Self {
        Self {
            full_name: &registration.full_name,
            roll_no: &registration.roll_no,
            college_name: &registration.college_name,
            currently_working_as: &registration.currently_working_as,
            address: &registration.address,
            email_or_mobile: &registration.email_or_mobile,
            password: &registration.password,
            user_type: RecordKind::Alumni,
            created_at: timestamp(),
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn backend_error(err: impl std::fmt::Display) -> MirrorError {
    MirrorError::backend(err.to_string())
}

impl RedisRegistrationMirror {
    /// Connect to the Redis instance at `url` and verify it responds.
    ///
    /// # Errors
    /// Returns [`MirrorError::Backend`] when the URL is invalid, the pool
    /// cannot be built, or the instance does not answer a `PING` within the
    /// connection timeout. Callers degrade to running without a mirror.
    pub async fn connect(url: &str) -> Result<Self, MirrorError> {
        let manager = RedisConnectionManager::new(url).map_err(backend_error)?;
        let pool = bb8::Pool::builder()
            .max_size(POOL_SIZE)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)
            .await
            .map_err(backend_error)?;

        {
            let mut connection = pool.get().await.map_err(backend_error)?;
            redis::cmd("PING")
                .query_async::<()>(&mut *connection)
                .await
                .map_err(backend_error)?;
        }

        Ok(Self { pool })
    }

    async fn store(&self, key_space: &str, document: String) -> Result<String, MirrorError> {
        let id = Uuid::new_v4().to_string();
        let key = format!("{key_space}:{id}");
        let mut connection = self.pool.get().await.map_err(backend_error)?;
        let () = redis::AsyncCommands::set(&mut *connection, key, document)
            .await
            .map_err(backend_error)?;
        Ok(id)
    }
}

#[async_trait]
impl RegistrationMirror for RedisRegistrationMirror {
    async fn mirror_student(
        &self,
        registration: &StudentRegistration,
    ) -> Result<String, MirrorError> {
        let document = serde_json::to_string(&StudentDocument::from(registration))
            .map_err(|err| MirrorError::serialization(err.to_string()))?;
        self.store("students", document).await
    }

    async fn mirror_alumni(
        &self,
        registration: &AlumniRegistration,
    ) -> Result<String, MirrorError> {
        let document = serde_json::to_string(&AlumniDocument::from(registration))
            .map_err(|err| MirrorError::serialization(err.to_string()))?;
        self.store("alumni", document).await
    }
}
