use super::*;

#[test]
fn role_label_matches_admin_flag() {
    assert_eq!(role_label(true), "Admin");
    assert_eq!(role_label(false), "User");
}

#[test]
fn role_class_adds_admin_modifier() {
    assert!(role_class(true).ends_with("--admin"));
    assert_eq!(role_class(false), "session-bar__role");
}

#[test]
fn display_identity_prefers_email() {
    assert_eq!(display_identity(Some("a@x.com")), "a@x.com");
    assert_eq!(display_identity(None), "Signed in");
}
