//! Auth routes — demo login/logout echo handlers.
//!
//! No credential validation, sessions, or storage: a login with both
//! fields present succeeds and echoes the username back with a fresh
//! server timestamp; logout always succeeds.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const REQUIRED_MESSAGE: &str = "Username and password are required";
const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

/// Body for `POST /api/login`. Absent fields decode as empty strings and
/// are rejected the same way.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// User record echoed back on a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
    pub login_time: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<SessionUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogoutResponse {
    success: bool,
    message: String,
}

fn credentials_present(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

fn login_time_now() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// `POST /api/login` — succeed iff both fields are non-empty.
pub async fn login(Json(req): Json<LoginRequest>) -> Response {
    if !credentials_present(&req.username, &req.password) {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse {
                success: false,
                user: None,
                message: Some(REQUIRED_MESSAGE.to_owned()),
            }),
        )
            .into_response();
    }

    let user = SessionUser {
        username: req.username,
        login_time: login_time_now(),
    };
    Json(LoginResponse { success: true, user: Some(user), message: None }).into_response()
}

/// `POST /api/logout` — always succeeds; there is no server-side session
/// to tear down.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { success: true, message: LOGGED_OUT_MESSAGE.to_owned() })
}
