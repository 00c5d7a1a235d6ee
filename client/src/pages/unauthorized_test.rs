use super::*;
use session::Role;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "branch@example.com".to_owned(),
        role,
        is_active: true,
        student_profile: None,
        merchant_profile: None,
        branch_profile: None,
    }
}

#[test]
fn message_names_account_and_role() {
    let message = unauthorized_message(Some(&user(Role::MerchantBranch)));
    assert!(message.contains("branch@example.com"));
    assert!(message.contains(Role::MerchantBranch.label()));
}

#[test]
fn message_without_user_asks_to_sign_in() {
    assert!(unauthorized_message(None).contains("sign in"));
}
