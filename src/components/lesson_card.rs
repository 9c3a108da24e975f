//! Catalog card for a single lesson with an add-to-cart action.

use leptos::prelude::*;

use crate::net::types::Lesson;
use crate::state::cart::CartState;

/// One lesson in the catalog grid.
///
/// The add button is disabled once the lesson is in the cart — duplicate
/// adds are no-ops at the store level, so the button state just mirrors
/// that invariant.
#[component]
pub fn LessonCard(lesson: Lesson) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let id = lesson.id;
    let in_cart = move || cart.get().contains(id);

    let add = {
        let lesson = lesson.clone();
        move |_| cart.update(|c| c.add(&lesson))
    };

    view! {
        <div class="lesson-card">
            <h3 class="lesson-card__title">{lesson.title.clone()}</h3>
            <p class="lesson-card__location">{lesson.location.clone()}</p>
            <p class="lesson-card__price">{format!("${:.2}", lesson.price)}</p>
            <p class="lesson-card__spaces">{format!("{} spaces", lesson.spaces)}</p>
            <button class="btn btn--primary" on:click=add disabled=in_cart>
                {move || if in_cart() { "In cart" } else { "Add to cart" }}
            </button>
        </div>
    }
}
