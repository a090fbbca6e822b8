//! Diesel row structs and domain conversions.
//!
//! Insertable rows borrow from validated registrations; queryable rows
//! project the login fields only, leaving `password` and `created_at` in the
//! database.

use diesel::prelude::*;

use crate::domain::{AlumniAccount, AlumniRegistration, StudentAccount, StudentRegistration};

use super::schema::{alumni, students};

/// Insertable student row.
#[derive(Debug, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudentRow<'a> {
    /// Full name of the student.
    pub full_name: &'a str,
    /// College roll number.
    pub roll_no: &'a str,
    /// Name of the college.
    pub college_name: &'a str,
    /// Department the student is enrolled in.
    pub department: &'a str,
    /// Postal address.
    pub address: &'a str,
    /// Login key.
    pub email_or_mobile: &'a str,
    /// Plaintext password.
    pub password: &'a str,
}

impl<'a> From<&'a StudentRegistration> for NewStudentRow<'a> {
    fn from(registration: &'a StudentRegistration) -> Self {
        Self {
            full_name: &registration.full_name,
            roll_no: &registration.roll_no,
            college_name: &registration.college_name,
            department: &registration.department,
            address: &registration.address,
            email_or_mobile: &registration.email_or_mobile,
            password: &registration.password,
        }
    }
}

/// Insertable alumni row.
#[derive(Debug, Insertable)]
#[diesel(table_name = alumni)]
pub struct NewAlumniRow<'a> {
    /// Full name of the alumnus or alumna.
    pub full_name: &'a str,
    /// College roll number held while studying.
    pub roll_no: &'a str,
    /// Name of the college.
    pub college_name: &'a str,
    /// Current occupation.
    pub currently_working_as: &'a str,
    /// Postal address.
    pub address: &'a str,
    /// Login key.
    pub email_or_mobile: &'a str,
    /// Plaintext password.
    pub password: &'a str,
}

impl<'a> From<&'a AlumniRegistration> for NewAlumniRow<'a> {
    fn from(registration: &'a AlumniRegistration) -> Self {
        Self {
            full_name: &registration.full_name,
            roll_no: &registration.roll_no,
            college_name: &registration.college_name,
            currently_working_as: &registration.currently_working_as,
            address: &registration.address,
            email_or_mobile: &registration.email_or_mobile,
            password: &registration.password,
        }
    }
}

/// Student row projected for the credential lookup.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    /// Primary key.
    pub id: i32,
    /// Full name of the student.
    pub full_name: String,
    /// College roll number.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Department the student is enrolled in.
    pub department: String,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
}

impl From<StudentRow> for StudentAccount {
    fn from(row: StudentRow) -> Self {
        Self {
            id: i64::from(row.id),
            full_name: row.full_name,
            roll_no: row.roll_no,
            college_name: row.college_name,
            department: row.department,
            address: row.address,
            email_or_mobile: row.email_or_mobile,
        }
    }
}

/// Alumni row projected for the credential lookup.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = alumni)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlumniRow {
    /// Primary key.
    pub id: i32,
    /// Full name of the alumnus or alumna.
    pub full_name: String,
    /// College roll number held while studying.
    pub roll_no: String,
    /// Name of the college.
    pub college_name: String,
    /// Current occupation.
    pub currently_working_as: String,
    /// Postal address.
    pub address: String,
    /// Login key.
    pub email_or_mobile: String,
}

impl From<AlumniRow> for AlumniAccount {
    fn from(row: AlumniRow) -> Self {
        Self {
            id: i64::from(row.id),
            full_name: row.full_name,
            roll_no: row.roll_no,
            college_name: row.college_name,
            currently_working_as: row.currently_working_as,
            address: row.address,
            email_or_mobile: row.email_or_mobile,
        }
    }
}
