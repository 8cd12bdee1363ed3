//! Error types
//!
//! Field-level validation failures are plain values that end up in
//! `FormErrors`; only directory construction and the terminal host can fail
//! in the infrastructure sense.

use std::fmt;
use std::io;

/// Username syntax failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    Required,
    TooShort,
    TooLong,
    InvalidCharacters,
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsernameError::Required => write!(f, "Username is required"),
            UsernameError::TooShort => write!(f, "Username must be at least 3 characters long"),
            UsernameError::TooLong => write!(f, "Username must be at most 20 characters long"),
            UsernameError::InvalidCharacters => write!(
                f,
                "Username can only contain letters, numbers, underscores, and hyphens"
            ),
        }
    }
}

impl std::error::Error for UsernameError {}

/// Password policy failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    Required,
    TooShort,
    TooLong,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Required => write!(f, "Password is required"),
            PasswordError::TooShort => write!(f, "Password must be at least 8 characters long"),
            PasswordError::TooLong => write!(f, "Password must be at most 128 characters long"),
            PasswordError::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            PasswordError::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            PasswordError::MissingDigit => write!(f, "Password must contain at least one number"),
            PasswordError::MissingSpecial => {
                write!(f, "Password must contain at least one special character")
            }
        }
    }
}

impl std::error::Error for PasswordError {}

/// Authentication failures
///
/// Unknown usernames and wrong passwords collapse into one variant so the
/// message cannot be used to probe which accounts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Seed data that violates the directory invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    ZeroId(String),
    DuplicateId(u32),
    DuplicateUsername(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::ZeroId(u) => write!(f, "User {} has id 0; ids must be positive", u),
            DirectoryError::DuplicateId(id) => write!(f, "Duplicate user id: {}", id),
            DirectoryError::DuplicateUsername(u) => write!(f, "Duplicate username: {}", u),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Top-level error for the terminal host
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Directory(DirectoryError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Directory(e) => write!(f, "User directory error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<DirectoryError> for AppError {
    fn from(error: DirectoryError) -> Self {
        AppError::Directory(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
