//! Wire types shared by the login/logout endpoints.
//!
//! DESIGN
//! ======
//! The persisted session record and the user object returned by
//! `/api/login` are the same JSON shape, so one `Session` type covers
//! both. Field names follow the wire contract (camelCase).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The logged-in user record: returned by the login endpoint and
/// persisted verbatim in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    /// RFC 3339 timestamp generated by the server at login.
    pub login_time: String,
}

/// Body for `POST /api/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from `POST /api/login`. On success `user` is present; on
/// rejection `message` carries the server's explanation.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<Session>,
    #[serde(default)]
    pub message: Option<String>,
}
