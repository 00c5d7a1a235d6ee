use super::*;

#[test]
fn http_status_only_for_http_variant() {
    let err = AuthError::Http { status: 403, message: "Forbidden".to_owned() };
    assert_eq!(err.http_status(), Some(403));
    assert_eq!(AuthError::Timeout.http_status(), None);
}

#[test]
fn unauthorized_covers_401_and_missing_credential() {
    assert!(AuthError::Http { status: 401, message: String::new() }.is_unauthorized());
    assert!(AuthError::MissingCredential.is_unauthorized());
    assert!(!AuthError::Http { status: 403, message: String::new() }.is_unauthorized());
    assert!(!AuthError::Network("down".to_owned()).is_unauthorized());
}

#[test]
fn http_error_displays_server_message() {
    let err = AuthError::Http { status: 400, message: "Invalid login credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn user_message_passes_server_text_through() {
    let err = SignInError::from(SessionError::from(AuthError::Http {
        status: 401,
        message: "Invalid login credentials".to_owned(),
    }));
    assert_eq!(err.user_message(), "Invalid login credentials");
}

#[test]
fn user_message_for_network_is_generic() {
    let err = SignInError::from(SessionError::from(AuthError::Network("dns".to_owned())));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    let err = SignInError::from(SessionError::from(AuthError::Timeout));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn student_message_differs_from_invalid_credentials() {
    let student = SignInError::StudentBarred.user_message();
    let invalid = SignInError::from(SessionError::from(AuthError::Http {
        status: 401,
        message: "Invalid login credentials".to_owned(),
    }))
    .user_message();
    assert_eq!(student, STUDENT_BARRED_MESSAGE);
    assert_ne!(student, invalid);
}

#[test]
fn busy_and_validation_messages() {
    assert_eq!(SignInError::Session(SessionError::Busy).user_message(), BUSY_MESSAGE);
    assert_eq!(SignInError::Validation(MISSING_FIELDS_MESSAGE).user_message(), MISSING_FIELDS_MESSAGE);
}

#[test]
fn role_refused_names_the_role() {
    let err = SessionError::RoleRefused(Role::Student);
    assert!(err.to_string().contains("student"));
}
