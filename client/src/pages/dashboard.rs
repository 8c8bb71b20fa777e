//! Dashboard: session info, installability status, and logout.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::controller::browser_controller;
use crate::state::session::SessionState;
use crate::util::pwa;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = move || session.get().user.map(|u| u.username).unwrap_or_default();
    let login_time = move || session.get().user.map(|u| u.login_time).unwrap_or_default();
    let status = pwa::status_lines();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            let mut controller = browser_controller(session.get_untracked());
            controller.logout().await;
            session.set(controller.into_state());
        });
    };

    view! {
        <div class="dashboard-view">
            <header class="app-header">
                <h1>"pwaCore"</h1>
                <nav class="app-nav">
                    <span class="user-info">{move || welcome_message(&username())}</span>
                    <button class="btn btn--secondary" on:click=on_logout>
                        "Logout"
                    </button>
                </nav>
            </header>
            <main class="app-main">
                <section class="dashboard-content">
                    <h2>"Dashboard"</h2>
                    <div class="info-card">
                        <h3>"Session Info"</h3>
                        <p><strong>"User: "</strong>{username}</p>
                        <p><strong>"Login Time: "</strong>{login_time}</p>
                    </div>
                    <div class="info-card">
                        <h3>"PWA Status"</h3>
                        <ul class="status-list">
                            {status
                                .into_iter()
                                .map(|line| view! { <li>{line}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </section>
            </main>
        </div>
    }
}

pub(crate) fn welcome_message(username: &str) -> String {
    format!("Welcome, {username}")
}
