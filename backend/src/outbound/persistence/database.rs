//! SQLite connection handling and schema bootstrap.
//!
//! Each operation opens its own connection and drops it when done, so a
//! failure in one call cannot leave a dangling transaction affecting the
//! next. The schema bootstrap uses `CREATE TABLE IF NOT EXISTS` and is safe
//! to run concurrently at startup.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::ports::StorePersistenceError;

const CREATE_STUDENTS: &str = "\
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    roll_no TEXT NOT NULL,
    college_name TEXT NOT NULL,
    department TEXT NOT NULL,
    address TEXT NOT NULL,
    email_or_mobile TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_ALUMNI: &str = "\
CREATE TABLE IF NOT EXISTS alumni (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    roll_no TEXT NOT NULL,
    college_name TEXT NOT NULL,
    currently_working_as TEXT NOT NULL,
    address TEXT NOT NULL,
    email_or_mobile TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Handle to the SQLite database file.
///
/// Cheap to clone; holds the path only. Connections are established per
/// call via [`SqliteDatabase::connect`].
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    path: String,
}

impl SqliteDatabase {
    /// Create a handle for the database at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Open a fresh connection.
    ///
    /// # Errors
    /// Returns [`StorePersistenceError::Connection`] when the file cannot be
    /// opened or created.
    pub fn connect(&self) -> Result<SqliteConnection, StorePersistenceError> {
        SqliteConnection::establish(&self.path)
            .map_err(|err| StorePersistenceError::connection(err.to_string()))
    }

    /// Idempotently create the `students` and `alumni` tables.
    ///
    /// # Errors
    /// Returns [`StorePersistenceError`] when the connection or either DDL
    /// statement fails. The relational store is the system of record, so
    /// callers should treat this as fatal at startup.
    pub fn ensure_schema(&self) -> Result<(), StorePersistenceError> {
        let mut connection = self.connect()?;
        for statement in [CREATE_STUDENTS, CREATE_ALUMNI] {
            diesel::sql_query(statement)
                .execute(&mut connection)
                .map_err(|err| StorePersistenceError::query(err.to_string()))?;
        }
        Ok(())
    }
}
