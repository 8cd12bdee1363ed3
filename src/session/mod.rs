//! Login session state
//!
//! Handles the login submission lifecycle as explicit values passed in and
//! returned, rather than flags mutated in place.

pub mod operations;
pub mod state;

pub use operations::{LoginOutcome, attempt_login};
pub use state::Session;
