//! Login submission
//!
//! One submission goes Idle -> Validating -> Rejected or Accepted in a single
//! call; retrying is up to the caller.

use crate::auth::{FormErrors, check_login_form};
use crate::directory::{UserDirectory, UserRecord};

/// Terminal state of one login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Rejected(FormErrors),
    /// The authenticated user, password blanked
    Accepted(UserRecord),
}

impl LoginOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LoginOutcome::Accepted(_))
    }
}

/// Validates a submission and, if it passes, resolves the sanitized user.
pub fn attempt_login(directory: &UserDirectory, username: &str, password: &str) -> LoginOutcome {
    match check_login_form(directory, username, password) {
        Ok(user) => LoginOutcome::Accepted(user),
        Err(errors) => LoginOutcome::Rejected(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FormField, validate_login_form_with_credentials};

    #[test]
    fn test_accepted_user_is_sanitized() {
        let dir = UserDirectory::bundled().unwrap();
        match attempt_login(&dir, "DEMO", "Demo123!") {
            LoginOutcome::Accepted(user) => {
                assert_eq!(user.username, "demo");
                assert!(user.password.is_empty());
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_carries_form_errors() {
        let dir = UserDirectory::bundled().unwrap();
        let outcome = attempt_login(&dir, "admin", "Wrong123!");
        assert!(!outcome.is_accepted());

        let LoginOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.get(FormField::Credentials),
            Some("Invalid username or password")
        );
    }

    #[test]
    fn test_outcome_matches_form_validation() {
        let dir = UserDirectory::bundled().unwrap();
        for (name, pass) in [("ab", "x"), ("demo", "nope"), ("demo", "Wrong123!")] {
            assert_eq!(
                attempt_login(&dir, name, pass),
                LoginOutcome::Rejected(validate_login_form_with_credentials(&dir, name, pass))
            );
        }
    }
}
