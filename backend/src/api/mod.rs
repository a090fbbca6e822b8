//! HTTP adapter: handlers, shared state, and error mapping.

pub mod error;
pub mod health;
pub mod login;
pub mod signup;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
