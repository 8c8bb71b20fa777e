//! Session controller: the view/session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `SessionState` and the finite set of legal view transitions.
//! Storage and network access go through the `SessionStore` and
//! `AuthGateway` seams so the whole lifecycle runs headless in tests;
//! the browser adapters live in `util::storage` and `net::api`.
//!
//! ERROR HANDLING
//! ==============
//! Operations never fail upward. Login surfaces a user-visible message
//! and leaves the state untouched; a malformed persisted record is
//! deleted and treated as absent; logout ignores endpoint failures
//! entirely (local-first logout).

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::types::{LoginResponse, Session};
use crate::state::session::SessionState;

/// Inline message shown when the login request cannot reach the server.
pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// Fallback message for a rejection without a server-provided message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Persisted-record access. One raw JSON record under a fixed key;
/// parsing stays in the controller so corrupt records can self-heal.
pub trait SessionStore {
    fn load_raw(&self) -> Option<String>;
    fn save_raw(&self, raw: &str);
    fn clear(&self);
}

/// The two auth calls. `Err` is a transport failure; application-level
/// rejection arrives as a well-formed `LoginResponse`.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// # Errors
    ///
    /// Returns a description of the transport failure when the request
    /// never produced a usable response.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String>;

    /// # Errors
    ///
    /// Returns a description of the transport failure; callers are free
    /// to ignore it.
    async fn logout(&self) -> Result<(), String>;
}

/// Owns the application state and drives every view transition.
pub struct SessionController<S, G> {
    store: S,
    gateway: G,
    state: SessionState,
}

impl<S: SessionStore, G: AuthGateway> SessionController<S, G> {
    pub fn new(store: S, gateway: G, state: SessionState) -> Self {
        Self { store, gateway, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Check the persisted session once at startup. A well-formed record
    /// goes straight to the dashboard; anything else lands on login, and
    /// a record that fails to parse is removed.
    pub fn restore_session(&mut self) {
        match self.store.load_raw() {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(user) => self.state.signed_in(user),
                Err(_) => {
                    self.store.clear();
                    self.state.signed_out();
                }
            },
            None => self.state.signed_out(),
        }
    }

    /// Submit credentials. On success the returned user is persisted and
    /// the dashboard is shown; otherwise the state is unchanged and the
    /// error carries the inline message to display. Never retries.
    ///
    /// # Errors
    ///
    /// Returns the user-visible message for a transport failure or an
    /// application-level rejection.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), String> {
        let response = self
            .gateway
            .login(username, password)
            .await
            .map_err(|_| CONNECTION_ERROR.to_owned())?;

        match (response.success, response.user) {
            (true, Some(user)) => {
                if let Ok(raw) = serde_json::to_string(&user) {
                    self.store.save_raw(&raw);
                }
                self.state.signed_in(user);
                Ok(())
            }
            _ => Err(response.message.unwrap_or_else(|| LOGIN_FAILED.to_owned())),
        }
    }

    /// Log out. The endpoint is notified best-effort; local logout
    /// proceeds regardless of the outcome.
    pub async fn logout(&mut self) {
        let _ = self.gateway.logout().await;
        self.store.clear();
        self.state.signed_out();
    }
}

/// Controller wired to the browser adapters, seeded with the current
/// state from the presentation layer's context signal.
pub fn browser_controller(
    state: SessionState,
) -> SessionController<crate::util::storage::BrowserStore, crate::net::api::HttpGateway> {
    SessionController::new(
        crate::util::storage::BrowserStore,
        crate::net::api::HttpGateway,
        state,
    )
}
