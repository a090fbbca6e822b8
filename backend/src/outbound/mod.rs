//! Driven adapters: concrete implementations of the domain ports.

pub mod mirror;
pub mod persistence;
