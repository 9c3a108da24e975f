//! Lessons listing page — the storefront landing view.

use leptos::prelude::*;

use crate::components::lesson_card::LessonCard;

/// Catalog page. Fetches the lesson list on mount; an unreachable backend
/// degrades to an empty catalog rather than an error page.
#[component]
pub fn LessonsPage() -> impl IntoView {
    let lessons = LocalResource::new(|| crate::net::api::fetch_lessons());

    view! {
        <div class="lessons-page">
            <h1>"Lessons"</h1>
            <Suspense fallback=move || view! { <p>"Loading lessons..."</p> }>
                {move || {
                    lessons
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="lessons-page__empty">"No lessons available."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="lessons-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|lesson| {
                                                view! { <LessonCard lesson=lesson/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
