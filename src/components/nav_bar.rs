//! Top navigation bar: route links, cart badge, session controls.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::session::SessionState;
use crate::util::storage;

/// Navigation bar shown on every page.
///
/// The cart badge reflects the line-item count; the right side switches
/// between login/register links and a greeting with a logout button.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    // Logout clears the in-memory session and the persisted record in the
    // same continuation, so accessors never see one without the other.
    let on_logout = move |_| {
        session.update(SessionState::clear);
        storage::clear_user();
        log::info!("logged out");
    };

    let cart_label = move || {
        let count = cart.get().count();
        format!("Cart ({count})")
    };

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"LessonShop"</a>
            <div class="nav-bar__links">
                <a href="/cart" class="nav-bar__cart">{cart_label}</a>
                <Show
                    when=move || session.get().logged_in()
                    fallback=|| {
                        view! {
                            <a href="/login">"Log in"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <span class="nav-bar__user">{greeting}</span>
                    <button class="btn nav-bar__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
