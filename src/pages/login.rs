//! Login page: credential form backed by the session store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::SessionState;
use crate::util::storage;

/// Login page — submits credentials to the auth API and establishes the
/// session on success. Redirects home once authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Already (or newly) authenticated: back to the storefront.
    Effect::new(move || {
        if session.get().logged_in() {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        error.set(None);
        session.update(SessionState::begin_request);

        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(user) => {
                    // Memory and storage update in the same continuation so
                    // no accessor observes one without the other.
                    session.update(|s| s.establish(user.clone()));
                    storage::save_user(&user);
                    log::info!("logged in as {}", user.email);
                }
                Err(err) => {
                    session.update(SessionState::settle_request);
                    error.set(Some(err.to_string()));
                }
            }
        });
    });

    let pending = move || session.get().pending;

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <label class="auth-page__label">
                "Email"
                <input
                    class="auth-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Password"
                <input
                    class="auth-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                class="btn btn--primary"
                on:click=move |_| submit.run(())
                disabled=pending
            >
                {move || if pending() { "Logging in..." } else { "Log in" }}
            </button>
            <p class="auth-page__alt">
                "No account? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
