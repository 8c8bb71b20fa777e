use axum::body::to_bytes;

use super::*;

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// credentials_present
// =============================================================================

#[test]
fn credentials_present_requires_both_fields() {
    assert!(credentials_present("bob", "x"));
    assert!(!credentials_present("", "x"));
    assert!(!credentials_present("bob", ""));
    assert!(!credentials_present("", ""));
}

// =============================================================================
// login_time_now
// =============================================================================

#[test]
fn login_time_now_is_rfc3339() {
    let stamp = login_time_now();
    assert!(OffsetDateTime::parse(&stamp, &Rfc3339).is_ok(), "got {stamp:?}");
}

// =============================================================================
// POST /api/login
// =============================================================================

#[tokio::test]
async fn login_echoes_username_with_timestamp() {
    let resp = login(Json(LoginRequest { username: "bob".to_owned(), password: "x".to_owned() }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["username"], "bob");
    assert!(body["user"]["loginTime"].is_string());
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn login_rejects_empty_password() {
    let resp = login(Json(LoginRequest { username: "bob".to_owned(), password: String::new() }))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username and password are required");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn login_rejects_empty_username() {
    let resp = login(Json(LoginRequest { username: String::new(), password: "x".to_owned() }))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn login_timestamp_parses_as_rfc3339() {
    let resp = login(Json(LoginRequest { username: "bob".to_owned(), password: "x".to_owned() }))
        .await;
    let body = json_body(resp).await;
    let stamp = body["user"]["loginTime"].as_str().unwrap();
    assert!(OffsetDateTime::parse(stamp, &Rfc3339).is_ok());
}

// =============================================================================
// POST /api/logout
// =============================================================================

#[tokio::test]
async fn logout_always_succeeds() {
    let resp = logout().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully");
}
