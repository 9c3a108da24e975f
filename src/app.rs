//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{cart::CartPage, lessons::LessonsPage, login::LoginPage, register::RegisterPage};
use crate::state::cart::CartState;
use crate::state::session::SessionState;
use crate::util::storage;

/// Root application component.
///
/// Provides the session and cart stores as contexts and sets up
/// client-side routing. Addressing is full-path (no hash fragments); the
/// paths bound here are the same four listed in [`crate::routes::ROUTES`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared stores, one instance each for the whole client.
    let session = RwSignal::new(SessionState::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(session);
    provide_context(cart);

    // Restore a persisted session on mount. The stored identity is trusted
    // until logout; a missing or undecodable record means no session.
    Effect::new(move || {
        if session.get_untracked().logged_in() {
            return;
        }
        if let Some(user) = storage::load_user() {
            log::info!("restored session for {}", user.email);
            session.update(|s| s.establish(user));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lessonshop.css"/>
        <Title text="LessonShop"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LessonsPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
