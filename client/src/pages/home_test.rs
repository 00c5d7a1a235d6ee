use super::*;
use session::AuthError;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "corp@example.com".to_owned(),
        role,
        is_active: true,
        student_profile: None,
        merchant_profile: None,
        branch_profile: None,
    }
}

#[test]
fn identity_label_shows_email_and_role() {
    let label = identity_label(Some(&user(Role::MerchantCorporate)));
    assert!(label.starts_with("corp@example.com"));
    assert!(label.ends_with(Role::MerchantCorporate.label()));
}

#[test]
fn identity_label_empty_when_signed_out() {
    assert_eq!(identity_label(None), "");
}

#[test]
fn refresh_failure_silent_when_guard_takes_over() {
    assert_eq!(refresh_failure_message(&SessionError::Busy), None);
    assert_eq!(refresh_failure_message(&SessionError::Superseded), None);
    assert_eq!(refresh_failure_message(&SessionError::Auth(AuthError::MissingCredential)), None);
    let expired = AuthError::Http { status: 401, message: "jwt expired".to_owned() };
    assert_eq!(refresh_failure_message(&SessionError::Auth(expired)), None);
}

#[test]
fn refresh_failure_shows_generic_message_otherwise() {
    let err = SessionError::Auth(AuthError::Timeout);
    assert_eq!(
        refresh_failure_message(&err).as_deref(),
        Some(session::error::GENERIC_FAILURE_MESSAGE)
    );
}
