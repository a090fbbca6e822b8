//! Diesel-backed `RegistrationRepository` adapter for SQLite.
//!
//! Diesel's SQLite driver is synchronous, so each operation runs inside
//! `tokio::task::spawn_blocking` with its own short-lived connection.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{RegistrationRepository, StorePersistenceError};
use crate::domain::{AlumniRegistration, AuthenticatedUser, StudentRegistration};

use super::database::SqliteDatabase;
use super::models::{AlumniRow, NewAlumniRow, NewStudentRow, StudentRow};
use super::schema::{alumni, students};

/// SQLite implementation of the relational store port.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    database: SqliteDatabase,
}

impl DieselRegistrationRepository {
    /// Create a repository over `database`.
    pub fn new(database: SqliteDatabase) -> Self {
        Self { database }
    }
}

fn join_error(err: tokio::task::JoinError) -> StorePersistenceError {
    StorePersistenceError::connection(format!("blocking task failed: {err}"))
}

fn query_error(err: diesel::result::Error) -> StorePersistenceError {
    StorePersistenceError::query(err.to_string())
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn insert_student(
        &self,
        registration: &StudentRegistration,
    ) -> Result<i64, StorePersistenceError> {
        let database = self.database.clone();
        let registration = registration.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = database.connect()?;
            diesel::insert_into(students::table)
                .values(NewStudentRow::from(&registration))
                .returning(students::id)
                .get_result::<i32>(&mut connection)
                .map(i64::from)
                .map_err(query_error)
        })
        .await
        .map_err(join_error)?
    }

    async fn insert_alumni(
        &self,
        registration: &AlumniRegistration,
    ) -> Result<i64, StorePersistenceError> {
        let database = self.database.clone();
        let registration = registration.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = database.connect()?;
            diesel::insert_into(alumni::table)
                .values(NewAlumniRow::from(&registration))
                .returning(alumni::id)
                .get_result::<i32>(&mut connection)
                .map(i64::from)
                .map_err(query_error)
        })
        .await
        .map_err(join_error)?
    }

    async fn find_by_credentials(
        &self,
        email_or_mobile: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>, StorePersistenceError> {
        let database = self.database.clone();
        let email_or_mobile = email_or_mobile.to_owned();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut connection = database.connect()?;

            // Students are always checked before alumni.
            let student = students::table
                .filter(students::email_or_mobile.eq(&email_or_mobile))
                .filter(students::password.eq(&password))
                .select(StudentRow::as_select())
                .first::<StudentRow>(&mut connection)
                .optional()
                .map_err(query_error)?;
            if let Some(row) = student {
                return Ok(Some(AuthenticatedUser::Student(row.into())));
            }

            let alumnus = alumni::table
                .filter(alumni::email_or_mobile.eq(&email_or_mobile))
                .filter(alumni::password.eq(&password))
                .select(AlumniRow::as_select())
                .first::<AlumniRow>(&mut connection)
                .optional()
                .map_err(query_error)?;
            Ok(alumnus.map(|row| AuthenticatedUser::Alumni(row.into())))
        })
        .await
        .map_err(join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordKind;
    use rstest::rstest;

    fn temp_repository() -> (tempfile::TempDir, DieselRegistrationRepository) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("repo.db");
        let database = SqliteDatabase::new(path.to_string_lossy());
        database.ensure_schema().expect("schema bootstrap");
        (dir, DieselRegistrationRepository::new(database))
    }

    fn student(email: &str, password: &str) -> StudentRegistration {
        StudentRegistration {
            full_name: "Asha Rao".to_owned(),
            roll_no: "21CS01".to_owned(),
            college_name: "ABC College".to_owned(),
            department: "CS".to_owned(),
            address: "Pune".to_owned(),
            email_or_mobile: email.to_owned(),
            password: password.to_owned(),
        }
    }

    fn alumnus(email: &str, password: &str) -> AlumniRegistration {
        AlumniRegistration {
            full_name: "Ravi Kumar".to_owned(),
            roll_no: "17EC42".to_owned(),
            college_name: "ABC College".to_owned(),
            currently_working_as: "Firmware Engineer".to_owned(),
            address: "Bengaluru".to_owned(),
            email_or_mobile: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[tokio::test]
    async fn inserts_assign_increasing_ids_per_table() {
        let (_dir, repository) = temp_repository();

        let first = repository
            .insert_student(&student("a@example.com", "pw"))
            .await
            .expect("insert");
        let second = repository
            .insert_student(&student("b@example.com", "pw"))
            .await
            .expect("insert");
        let alumni_first = repository
            .insert_alumni(&alumnus("c@example.com", "pw"))
            .await
            .expect("insert");

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        // Identities are independent per table.
        assert_eq!(alumni_first, 1);
    }

    #[tokio::test]
    async fn find_by_credentials_round_trips_student_fields() {
        let (_dir, repository) = temp_repository();
        repository
            .insert_student(&student("asha@example.com", "pw123"))
            .await
            .expect("insert");

        let user = repository
            .find_by_credentials("asha@example.com", "pw123")
            .await
            .expect("lookup")
            .expect("match");

        let AuthenticatedUser::Student(account) = user else {
            panic!("expected a student match");
        };
        assert_eq!(account.id, 1);
        assert_eq!(account.full_name, "Asha Rao");
        assert_eq!(account.department, "CS");
        assert_eq!(account.email_or_mobile, "asha@example.com");
    }

    #[rstest]
    #[case("asha@example.com", "wrong")]
    #[case("nobody@example.com", "pw123")]
    #[tokio::test]
    async fn find_by_credentials_requires_exact_pair(
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let (_dir, repository) = temp_repository();
        repository
            .insert_student(&student("asha@example.com", "pw123"))
            .await
            .expect("insert");

        let matched = repository
            .find_by_credentials(email, password)
            .await
            .expect("lookup");
        assert!(matched.is_none());
    }

    #[tokio::test]
    async fn students_are_checked_before_alumni() {
        let (_dir, repository) = temp_repository();
        repository
            .insert_alumni(&alumnus("shared@example.com", "pw"))
            .await
            .expect("insert");
        repository
            .insert_student(&student("shared@example.com", "pw"))
            .await
            .expect("insert");

        let user = repository
            .find_by_credentials("shared@example.com", "pw")
            .await
            .expect("lookup")
            .expect("match");

        assert_eq!(user.kind(), RecordKind::Student);
    }

    #[tokio::test]
    async fn alumni_match_is_returned_when_no_student_matches() {
        let (_dir, repository) = temp_repository();
        repository
            .insert_alumni(&alumnus("ravi@example.com", "hunter2"))
            .await
            .expect("insert");

        let user = repository
            .find_by_credentials("ravi@example.com", "hunter2")
            .await
            .expect("lookup")
            .expect("match");

        let AuthenticatedUser::Alumni(account) = user else {
            panic!("expected an alumni match");
        };
        assert_eq!(account.currently_working_as, "Firmware Engineer");
    }

    #[tokio::test]
    async fn duplicate_credentials_return_the_first_row() {
        let (_dir, repository) = temp_repository();
        repository
            .insert_student(&student("dup@example.com", "pw"))
            .await
            .expect("insert");
        let mut second = student("dup@example.com", "pw");
        second.full_name = "Second Entry".to_owned();
        repository.insert_student(&second).await.expect("insert");

        let user = repository
            .find_by_credentials("dup@example.com", "pw")
            .await
            .expect("lookup")
            .expect("match");

        let AuthenticatedUser::Student(account) = user else {
            panic!("expected a student match");
        };
        assert_eq!(account.id, 1);
    }
}
