use std::sync::Arc;
use std::time::Duration;

use cypherx_login::chat::{ChatThread, Responder};
use cypherx_login::error::{PasswordError, UsernameError};
use cypherx_login::{
    FormErrors, LoginOutcome, Session, UserDirectory, attempt_login, authenticate_user,
    has_form_errors, validate_login_form_with_credentials, validate_password, validate_username,
};

fn directory() -> UserDirectory {
    UserDirectory::bundled().expect("bundled directory loads")
}

#[test]
fn test_bundled_accounts_meet_password_policy() {
    let dir = directory();
    assert_eq!(dir.len(), 3);
    for user in dir.users() {
        assert!(validate_username(&user.username).is_ok(), "{}", user.username);
        assert!(validate_password(&user.password).is_ok(), "{}", user.username);
    }
}

#[test]
fn test_every_bundled_account_can_log_in() {
    let dir = directory();
    for (username, password) in [
        ("admin", "Admin123!"),
        ("testuser", "Test123!"),
        ("demo", "Demo123!"),
    ] {
        let errors = validate_login_form_with_credentials(&dir, username, password);
        assert!(!has_form_errors(&errors), "{username}: {errors:?}");
    }
}

#[test]
fn test_invalid_usernames_never_reach_credentials() {
    let dir = directory();
    let cases = [
        ("ab", UsernameError::TooShort),
        ("abcdefghijklmnopqrstu", UsernameError::TooLong),
        ("bad name", UsernameError::InvalidCharacters),
        ("   ", UsernameError::Required),
    ];

    for (username, expected) in cases {
        assert_eq!(validate_username(username), Err(expected));
        let errors = validate_login_form_with_credentials(&dir, username, "Admin123!");
        assert_eq!(errors.username, Some(expected.to_string()));
        assert!(errors.password.is_none());
        assert!(errors.credentials.is_none());
    }
}

#[test]
fn test_first_violated_password_rule_reported() {
    assert_eq!(validate_password("abc"), Err(PasswordError::TooShort));
    assert_eq!(validate_password("lowercase1!"), Err(PasswordError::MissingUppercase));
}

#[test]
fn test_short_username_short_circuits() {
    let dir = directory();
    let errors = validate_login_form_with_credentials(&dir, "ab", "x");
    assert_eq!(
        errors,
        FormErrors {
            username: Some("Username must be at least 3 characters long".into()),
            password: None,
            credentials: None,
        }
    );
}

#[test]
fn test_authentication_failures_share_message() {
    let dir = directory();
    let wrong = authenticate_user(&dir, "admin", "wrongpass");
    let missing = authenticate_user(&dir, "nosuchuser", "whatever");

    assert!(!wrong.success && !missing.success);
    assert_eq!(wrong.message, missing.message);
    assert!(wrong.user.is_none() && missing.user.is_none());
}

#[test]
fn test_successful_authentication_blanks_password() {
    let dir = directory();
    let result = authenticate_user(&dir, "admin", "Admin123!");
    assert!(result.success);
    assert_eq!(result.user.as_ref().map(|u| u.password.as_str()), Some(""));
}

#[test]
fn test_directory_shared_across_threads() {
    let dir = Arc::new(directory());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dir = Arc::clone(&dir);
            std::thread::spawn(move || attempt_login(&dir, "testuser", "Test123!"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_accepted());
    }
}

#[test]
fn test_rejected_attempt_can_be_retried() {
    let dir = directory();
    let (session, errors) = Session::default().login(&dir, "testuser", "Wrong123!");
    assert!(errors.credentials.is_some());

    let (session, errors) = session.login(&dir, "testuser", "Test123!");
    assert!(!errors.has_errors());
    assert!(matches!(
        attempt_login(&dir, "testuser", "Test123!"),
        LoginOutcome::Accepted(_)
    ));
    assert_eq!(session.current_user().map(|u| u.id), Some(2));
}

#[tokio::test]
async fn test_chat_round_trip_after_login() {
    let dir = directory();
    let (session, _) = Session::default().login(&dir, "demo", "Demo123!");
    assert!(session.is_logged_in());

    let responder = Responder::new(Duration::ZERO);
    let mut thread = ChatThread::new();

    let content = thread.submit("What is Rust?").unwrap().content.clone();
    let reply = responder.reply(&content).await;
    thread.receive_reply(reply);

    let messages = thread.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[2].content.contains("\"What is Rust?\""));
}
