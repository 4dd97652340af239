//! Search Bar Component
//!
//! One-way event source: typing pushes the term into the listing state, which
//! owns the active filter. Nothing ever reads the input back out of the DOM.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search restaurants..."
                on:input=move |ev| {
                    store.listing().write().set_filter(&event_target_value(&ev));
                }
            />
        </div>
    }
}
