//! Root application component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the session state context and materializes exactly one view
//! per state. Startup work (persisted-session restore, service worker
//! registration) runs once in a mount effect.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::controller::browser_controller;
use crate::pages::{dashboard::DashboardPage, loading::LoadingView, login::LoginPage};
use crate::state::session::{SessionState, View};
use crate::util::pwa;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // One-shot startup: no tracked reads, so the effect runs only once.
    Effect::new(move || {
        let mut controller = browser_controller(session.get_untracked());
        controller.restore_session();
        session.set(controller.into_state());
        pwa::register_worker();
    });

    view! {
        <Title text="pwaCore"/>
        <main class="viewport">
            {move || match session.get().current_view {
                View::Loading => view! { <LoadingView/> }.into_any(),
                View::Login => view! { <LoginPage/> }.into_any(),
                View::Dashboard => view! { <DashboardPage/> }.into_any(),
            }}
        </main>
    }
}
