//! SQLite persistence adapter using the Diesel ORM.
//!
//! The adapter translates between Diesel row structs and domain types; no
//! business logic lives here. Row structs and table definitions are internal
//! implementation details, never exposed to the domain layer.

mod database;
mod diesel_registration_repository;
mod models;
mod schema;

pub use database::SqliteDatabase;
pub use diesel_registration_repository::DieselRegistrationRepository;
