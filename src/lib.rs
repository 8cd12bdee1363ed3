pub mod auth;
pub mod chat;
pub mod config;
pub mod directory;
pub mod error;
pub mod session;

pub use auth::{
    AuthResult, FormErrors, FormField, authenticate_user, has_form_errors,
    validate_login_form_with_credentials, validate_password, validate_username,
};
pub use directory::{UserDirectory, UserRecord};
pub use session::{LoginOutcome, Session, attempt_login};
