//! Field syntax checks
//!
//! Each check runs its rules in a fixed order and reports only the first
//! rule that fails. Lengths are counted in UTF-16 code units, so a character
//! outside the Basic Multilingual Plane counts as two.

use crate::error::{PasswordError, UsernameError};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Characters that satisfy the password special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Validates username shape: required, 3..=20 code units, `[A-Za-z0-9_-]` only.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.trim().is_empty() {
        return Err(UsernameError::Required);
    }

    let length = utf16_len(username);
    if length < MIN_USERNAME_LENGTH {
        return Err(UsernameError::TooShort);
    }
    if length > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong);
    }

    if !username.chars().all(is_username_char) {
        return Err(UsernameError::InvalidCharacters);
    }

    Ok(())
}

/// Validates the password policy.
///
/// Rule order: required, minimum length, maximum length, uppercase,
/// lowercase, digit, special character. Letter and digit classes are ASCII.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Required);
    }

    let length = utf16_len(password);
    if length < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PasswordError::MissingSpecial);
    }

    Ok(())
}
