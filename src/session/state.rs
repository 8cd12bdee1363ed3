//! Module `state`
//!
//! Defines the `Session` value tracking whether someone is logged in.

use log::info;

use crate::auth::FormErrors;
use crate::directory::{UserDirectory, UserRecord};
use crate::session::operations::{LoginOutcome, attempt_login};

/// Who, if anyone, is logged in.
///
/// Transitions consume the current session and return the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(UserRecord),
}

impl Session {
    /// Runs one login submission.
    ///
    /// On acceptance the session moves to `LoggedIn` and the returned errors
    /// are empty; on rejection the session is returned unchanged together
    /// with the errors to display.
    pub fn login(
        self,
        directory: &UserDirectory,
        username: &str,
        password: &str,
    ) -> (Session, FormErrors) {
        match attempt_login(directory, username, password) {
            LoginOutcome::Accepted(user) => {
                info!("Session opened for {}", user.username);
                (Session::LoggedIn(user), FormErrors::default())
            }
            LoginOutcome::Rejected(errors) => (self, errors),
        }
    }

    /// Ends the session, if any.
    pub fn logout(self) -> Session {
        if let Session::LoggedIn(user) = &self {
            info!("Session closed for {}", user.username);
        }
        Session::LoggedOut
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        match self {
            Session::LoggedIn(user) => Some(user),
            Session::LoggedOut => None,
        }
    }

    /// Name shown in the chat header; "User" when logged out
    pub fn display_name(&self) -> &str {
        self.current_user()
            .map(|user| user.username.as_str())
            .unwrap_or("User")
    }
}
