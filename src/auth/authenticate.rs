//! Credential check against the user directory
//!
//! Passwords are compared as stored plaintext. Swapping in a salted hash
//! comparison only touches `verify_credentials`.

use log::{info, warn};

use crate::auth::results::AuthResult;
use crate::directory::{UserDirectory, UserRecord};
use crate::error::AuthError;

/// Looks up `username` (ignoring case) and checks the password exactly.
///
/// Returns the stored record, password included; callers that hand the user
/// onward should go through `authenticate_user` instead.
pub fn verify_credentials<'a>(
    directory: &'a UserDirectory,
    username: &str,
    password: &str,
) -> Result<&'a UserRecord, AuthError> {
    match directory.find_user_by_username(username) {
        Some(user) if user.password == password => Ok(user),
        _ => Err(AuthError::InvalidCredentials),
    }
}

/// Authenticates a username/password pair.
///
/// Unknown users and wrong passwords produce the same failure message.
pub fn authenticate_user(directory: &UserDirectory, username: &str, password: &str) -> AuthResult {
    match verify_credentials(directory, username, password) {
        Ok(user) => {
            info!("User {} (id {}) authenticated", user.username, user.id);
            AuthResult::succeeded(user)
        }
        Err(err) => {
            warn!("Authentication failed for {:?}", username);
            AuthResult::failed(err)
        }
    }
}
