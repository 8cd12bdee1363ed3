//! Error handling
//!
//! Defines error types and handling for the login pipeline and its host.

pub mod handlers;
pub mod types;

pub use types::*;
