use super::*;

#[test]
fn welcome_message_includes_username() {
    assert_eq!(welcome_message("alice"), "Welcome, alice");
}

#[test]
fn welcome_message_handles_empty_username() {
    assert_eq!(welcome_message(""), "Welcome, ");
}
