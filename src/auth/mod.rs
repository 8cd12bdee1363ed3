//! Authentication pipeline
//!
//! Field syntax checks, the credential check against the user directory, and
//! the combined login form validation that orders them.

pub mod authenticate;
pub mod form;
pub mod results;
pub mod validator;

pub use authenticate::{authenticate_user, verify_credentials};
pub use form::{check_login_form, validate_login_form, validate_login_form_with_credentials};
pub use results::{AuthResult, FormErrors, FormField, has_form_errors};
pub use validator::{validate_password, validate_username};
