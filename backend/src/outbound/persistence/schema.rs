//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the bootstrap statements in `database.rs`
//! exactly. They are used by Diesel for compile-time query validation and
//! type-safe SQL generation.

diesel::table! {
    /// Registered students.
    students (id) {
        /// Primary key: auto-incrementing rowid.
        id -> Integer,
        /// Full name of the student.
        full_name -> Text,
        /// College roll number.
        roll_no -> Text,
        /// Name of the college.
        college_name -> Text,
        /// Department the student is enrolled in.
        department -> Text,
        /// Postal address.
        address -> Text,
        /// Login key; not unique by design.
        email_or_mobile -> Text,
        /// Plaintext password.
        password -> Text,
        /// Store-assigned creation timestamp.
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Registered alumni.
    alumni (id) {
        /// Primary key: auto-incrementing rowid.
        id -> Integer,
        /// Full name of the alumnus or alumna.
        full_name -> Text,
        /// College roll number held while studying.
        roll_no -> Text,
        /// Name of the college.
        college_name -> Text,
        /// Current occupation.
        currently_working_as -> Text,
        /// Postal address.
        address -> Text,
        /// Login key; not unique by design.
        email_or_mobile -> Text,
        /// Plaintext password.
        password -> Text,
        /// Store-assigned creation timestamp.
        created_at -> Timestamp,
    }
}
