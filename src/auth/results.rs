//! Authentication result types
//!
//! Defines result structures returned by authentication and form validation.

use crate::directory::UserRecord;
use crate::error::AuthError;

/// Outcome of a single authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    /// Present only on success, with the password blanked
    pub user: Option<UserRecord>,
    pub message: String,
}

impl AuthResult {
    pub fn succeeded(user: &UserRecord) -> Self {
        Self {
            success: true,
            user: Some(user.sanitized()),
            message: "Login successful".to_string(),
        }
    }

    pub fn failed(err: AuthError) -> Self {
        Self {
            success: false,
            user: None,
            message: err.to_string(),
        }
    }
}

/// Fields a login form can report errors against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Password,
    Credentials,
}

/// Per-field messages from one validation pass.
///
/// A field that is `None` or holds an empty string passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub credentials: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        let slot = match field {
            FormField::Username => &self.username,
            FormField::Password => &self.password,
            FormField::Credentials => &self.credentials,
        };
        slot.as_deref().filter(|msg| !msg.is_empty())
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// Drops the error for `field`, as when the user edits that input.
    pub fn clear(&mut self, field: FormField) {
        *self.slot_mut(field) = None;
    }

    /// True if any field carries a non-empty message
    pub fn has_errors(&self) -> bool {
        [FormField::Username, FormField::Password, FormField::Credentials]
            .into_iter()
            .any(|field| self.get(field).is_some())
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Username => &mut self.username,
            FormField::Password => &mut self.password,
            FormField::Credentials => &mut self.credentials,
        }
    }
}

/// Whether submission must be blocked
pub fn has_form_errors(errors: &FormErrors) -> bool {
    errors.has_errors()
}
