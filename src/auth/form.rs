//! Login form validation
//!
//! Syntax errors short-circuit: a bad username hides the password check, and
//! any syntax error hides the credential check.

use crate::auth::authenticate::authenticate_user;
use crate::auth::results::{AuthResult, FormErrors};
use crate::auth::validator::{validate_password, validate_username};
use crate::directory::{UserDirectory, UserRecord};

/// Syntax-only validation, reporting both fields at once.
pub fn validate_login_form(username: &str, password: &str) -> FormErrors {
    FormErrors {
        username: validate_username(username).err().map(|e| e.to_string()),
        password: validate_password(password).err().map(|e| e.to_string()),
        credentials: None,
    }
}

/// Runs the ordered checks once and yields the sanitized user on success.
pub fn check_login_form(
    directory: &UserDirectory,
    username: &str,
    password: &str,
) -> Result<UserRecord, FormErrors> {
    let mut errors = FormErrors::default();

    if let Err(e) = validate_username(username) {
        errors.username = Some(e.to_string());
        return Err(errors);
    }

    if let Err(e) = validate_password(password) {
        errors.password = Some(e.to_string());
        return Err(errors);
    }

    match authenticate_user(directory, username, password) {
        AuthResult {
            success: true,
            user: Some(user),
            ..
        } => Ok(user),
        result => {
            errors.credentials = Some(result.message);
            Err(errors)
        }
    }
}

/// Full validation of a login submission.
///
/// An empty result means the credentials were accepted.
pub fn validate_login_form_with_credentials(
    directory: &UserDirectory,
    username: &str,
    password: &str,
) -> FormErrors {
    check_login_form(directory, username, password)
        .err()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::has_form_errors;

    #[test]
    fn test_valid_account_has_no_errors() {
        let dir = UserDirectory::bundled().unwrap();
        let errors = validate_login_form_with_credentials(&dir, "testuser", "Test123!");
        assert_eq!(errors, FormErrors::default());
        assert!(!has_form_errors(&errors));
    }

    #[test]
    fn test_username_error_masks_everything_else() {
        let dir = UserDirectory::bundled().unwrap();
        let errors = validate_login_form_with_credentials(&dir, "ab", "x");

        assert_eq!(
            errors.username.as_deref(),
            Some("Username must be at least 3 characters long")
        );
        assert!(errors.password.is_none());
        assert!(errors.credentials.is_none());
    }

    #[test]
    fn test_password_error_masks_credentials() {
        let dir = UserDirectory::bundled().unwrap();
        let errors = validate_login_form_with_credentials(&dir, "nosuchuser", "short");

        assert!(errors.username.is_none());
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters long")
        );
        assert!(errors.credentials.is_none());
    }

    #[test]
    fn test_credential_error_is_generic() {
        let dir = UserDirectory::bundled().unwrap();
        let wrong = validate_login_form_with_credentials(&dir, "admin", "Wrong123!");
        let unknown = validate_login_form_with_credentials(&dir, "ghost", "Ghost123!");

        assert_eq!(
            wrong.credentials.as_deref(),
            Some("Invalid username or password")
        );
        assert_eq!(wrong, unknown);
        assert!(wrong.username.is_none() && wrong.password.is_none());
    }

    #[test]
    fn test_syntax_only_reports_both_fields() {
        let errors = validate_login_form("", "");
        assert_eq!(errors.username.as_deref(), Some("Username is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
        assert!(errors.credentials.is_none());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let dir = UserDirectory::bundled().unwrap();
        for (user, pass) in [("admin", "Admin123!"), ("admin", "nope"), ("a b", "")] {
            assert_eq!(
                validate_login_form_with_credentials(&dir, user, pass),
                validate_login_form_with_credentials(&dir, user, pass)
            );
        }
    }

    #[test]
    fn test_check_returns_user_or_same_errors() {
        let dir = UserDirectory::bundled().unwrap();

        let user = check_login_form(&dir, "Admin", "Admin123!").unwrap();
        assert_eq!(user.username, "admin");
        assert!(user.password.is_empty());

        for (name, pass) in [("ab", "x"), ("admin", "short"), ("admin", "Wrong123!")] {
            assert_eq!(
                check_login_form(&dir, name, pass).unwrap_err(),
                validate_login_form_with_credentials(&dir, name, pass)
            );
        }
    }
}
