//! Cart page listing line items with removal and a running total.

use leptos::prelude::*;

use crate::state::cart::CartState;

/// Cart view. Purely a projection of [`CartState`]; every action routes
/// through the store's own operations.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || !cart.get().is_empty()
                fallback=|| view! { <p class="cart-page__empty">"Your cart is empty."</p> }
            >
                <ul class="cart-page__items">
                    {move || {
                        cart.get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <li class="cart-page__item">
                                        <span class="cart-page__title">{item.title.clone()}</span>
                                        <span class="cart-page__price">
                                            {format!("${:.2}", item.price)}
                                        </span>
                                        <button
                                            class="btn cart-page__remove"
                                            on:click=move |_| cart.update(|c| c.remove(id))
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <p class="cart-page__total">
                    {move || format!("Total: ${:.2}", cart.get().total())}
                </p>
                <button class="btn cart-page__clear" on:click=move |_| cart.update(CartState::clear)>
                    "Clear cart"
                </button>
            </Show>
        </div>
    }
}
