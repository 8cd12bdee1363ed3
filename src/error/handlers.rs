//! Error handlers
//!
//! Reports host-level failures.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("CypherX error: {}", err);
}

/// Process exit code for an application error (sysexits values)
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::Directory(_) => 65,
        AppError::Io(_) => 74,
    }
}
