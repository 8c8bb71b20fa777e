//! View/session state for the single-viewport app.
//!
//! DESIGN
//! ======
//! Exactly one view is active at a time; `Loading` is the transient
//! startup state and is never re-entered. The only two transitions are
//! `signed_in` and `signed_out`, which keep `is_authenticated` agreeing
//! with `user` presence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// The view currently materialized in the app viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Transient startup state while the persisted session is checked.
    #[default]
    Loading,
    Login,
    Dashboard,
}

/// In-memory application state owned by the session controller and
/// shared with the presentation layer via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_view: View,
    pub user: Option<Session>,
    pub is_authenticated: bool,
}

impl SessionState {
    /// Enter the dashboard with an authenticated user.
    pub fn signed_in(&mut self, user: Session) {
        self.current_view = View::Dashboard;
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Return to the login view with no user.
    pub fn signed_out(&mut self) {
        self.current_view = View::Login;
        self.user = None;
        self.is_authenticated = false;
    }
}
