use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Role::MerchantCorporate).unwrap(), "merchant_corporate");
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
}

#[test]
fn role_from_str_accepts_every_wire_name() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn role_from_str_rejects_unknown() {
    assert_eq!("superuser".parse::<Role>(), Err("unknown role: superuser".to_owned()));
}

#[test]
fn unknown_role_fails_user_decode() {
    let raw = serde_json::json!({ "id": "u1", "email": "a@b.com", "role": "owner" });
    assert!(serde_json::from_value::<User>(raw).is_err());
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_decodes_camel_case_fields() {
    let raw = serde_json::json!({
        "id": "u1",
        "email": "branch@example.com",
        "role": "merchant_branch",
        "isActive": false,
        "branchProfile": { "branchName": "Downtown" }
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, Role::MerchantBranch);
    assert!(!user.is_active);
    assert_eq!(user.profile(), Some(&serde_json::json!({ "branchName": "Downtown" })));
}

#[test]
fn user_is_active_defaults_true() {
    let raw = serde_json::json!({ "id": "u1", "email": "a@b.com", "role": "admin" });
    let user: User = serde_json::from_value(raw).unwrap();
    assert!(user.is_active);
    assert!(user.profile().is_none());
}

#[test]
fn retain_role_profile_drops_foreign_profiles() {
    let raw = serde_json::json!({
        "id": "u1",
        "email": "corp@example.com",
        "role": "merchant_corporate",
        "merchantProfile": { "name": "Acme" },
        "studentProfile": { "school": "X" }
    });
    let mut user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.retain_role_profile(), vec!["studentProfile"]);
    assert!(user.student_profile.is_none());
    assert!(user.merchant_profile.is_some());
}

// =============================================================================
// Envelopes
// =============================================================================

#[test]
fn login_envelope_extracts_access_token() {
    let raw = serde_json::json!({
        "data": {
            "user": { "id": "u1" },
            "session": { "access_token": "tok", "refresh_token": "ref", "expires_at": 1700000000 }
        },
        "status": "success",
        "message": "Logged in"
    });
    let env: Envelope<LoginData> = serde_json::from_value(raw).unwrap();
    assert_eq!(env.data.session.access_token, "tok");
    assert_eq!(env.data.session.expires_at, Some(1_700_000_000));
    assert_eq!(env.message.as_deref(), Some("Logged in"));
}

#[test]
fn error_envelope_joins_message_array() {
    let raw = serde_json::json!({
        "statusCode": 400,
        "message": ["email must be an email", " password should not be empty "],
        "error": "Bad Request"
    });
    let env: ErrorEnvelope = serde_json::from_value(raw).unwrap();
    assert_eq!(env.status_code, Some(400));
    assert_eq!(
        env.display_message().as_deref(),
        Some("email must be an email, password should not be empty")
    );
}

#[test]
fn error_envelope_falls_back_to_error_field() {
    let raw = serde_json::json!({ "statusCode": 401, "message": "", "error": "Unauthorized" });
    let env: ErrorEnvelope = serde_json::from_value(raw).unwrap();
    assert_eq!(env.display_message().as_deref(), Some("Unauthorized"));
}

#[test]
fn error_envelope_without_text_has_no_message() {
    let env: ErrorEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(env.display_message(), None);
}
