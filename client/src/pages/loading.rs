//! Transient startup view shown while the persisted session is checked.

use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
