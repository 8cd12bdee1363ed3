//! Account record types

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A single account as stored in the seed.
///
/// The password is plaintext; see `sanitized` for the copy handed to callers
/// after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Copy of this record with the password blanked
    pub fn sanitized(&self) -> UserRecord {
        UserRecord {
            password: String::new(),
            ..self.clone()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
