use super::*;

// =============================================================================
// Session wire shape
// =============================================================================

#[test]
fn session_serializes_login_time_as_camel_case() {
    let session = Session {
        username: "alice".to_owned(),
        login_time: "2024-01-01T00:00:00Z".to_owned(),
    };
    let raw = serde_json::to_string(&session).unwrap();
    assert_eq!(raw, r#"{"username":"alice","loginTime":"2024-01-01T00:00:00Z"}"#);
}

#[test]
fn session_deserializes_persisted_record() {
    let session: Session =
        serde_json::from_str(r#"{"username":"alice","loginTime":"2024-01-01T00:00:00Z"}"#).unwrap();
    assert_eq!(session.username, "alice");
    assert_eq!(session.login_time, "2024-01-01T00:00:00Z");
}

// =============================================================================
// LoginResponse tolerance
// =============================================================================

#[test]
fn login_response_success_without_message() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"success":true,"user":{"username":"bob","loginTime":"T"}}"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.user.unwrap().username, "bob");
    assert!(resp.message.is_none());
}

#[test]
fn login_response_failure_without_user() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"success":false,"message":"Username and password are required"}"#)
            .unwrap();
    assert!(!resp.success);
    assert!(resp.user.is_none());
    assert_eq!(resp.message.as_deref(), Some("Username and password are required"));
}
