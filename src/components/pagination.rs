//! Pagination Controls Component
//!
//! Linear 1..total_pages buttons with Previous/Next, driven entirely by the
//! listing state (which also holds the active filter, so a page switch always
//! sees the same filtered set the grid shows). Out-of-range targets are
//! ignored by `go_to_page` itself.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PaginationControls() -> impl IntoView {
    let store = use_app_store();
    let pages = move || {
        let view = store.listing().read().current_page();
        (view.page_number, view.total_pages)
    };

    view! {
        <div class="pagination">
            <button
                class="page-btn prev"
                disabled=move || pages().0 <= 1
                on:click=move |_| {
                    let (current, _) = pages();
                    store.listing().write().go_to_page(current - 1);
                }
            >
                "Previous"
            </button>
            <For
                each={move || (1..=pages().1).collect::<Vec<usize>>()}
                key=|n| *n
                children=move |n| {
                    let btn_class = move || {
                        if pages().0 == n { "page-btn active" } else { "page-btn" }
                    };
                    view! {
                        <button
                            class=btn_class
                            on:click=move |_| store.listing().write().go_to_page(n)
                        >
                            {n}
                        </button>
                    }
                }
            />
            <button
                class="page-btn next"
                disabled=move || {
                    let (current, total) = pages();
                    current >= total
                }
                on:click=move |_| {
                    let (current, _) = pages();
                    store.listing().write().go_to_page(current + 1);
                }
            >
                "Next"
            </button>
        </div>
    }
}
