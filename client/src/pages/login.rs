//! Login page: username/password form posting to the session controller.

use leptos::prelude::*;

use crate::controller::browser_controller;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get();
        let password_value = password.get();
        busy.set(true);
        error.set(String::new());

        leptos::task::spawn_local(async move {
            let mut controller = browser_controller(session.get_untracked());
            match controller.login(&username_value, &password_value).await {
                Ok(()) => session.set(controller.into_state()),
                Err(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-view">
            <div class="login-container">
                <h1>"pwaCore"</h1>
                <p class="subtitle">"Progressive Web Application"</p>
                <form class="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            required
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="error-message">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
