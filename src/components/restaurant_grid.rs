//! Restaurant Grid Component
//!
//! Public listing: loading spinner while the fetch is in flight, an inline
//! error state when it failed, an explicit no-results state when the filter
//! matches nothing, otherwise the current page of cards plus pagination.

use leptos::prelude::*;

use crate::components::{PaginationControls, RestaurantCard, RestaurantDetailModal};
use crate::context::use_app_context;
use crate::render::{card_views, detail_view, DetailView};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RestaurantGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (detail, set_detail) = signal::<Option<DetailView>>(None);

    let on_details = move |id: u32| {
        let view = store
            .listing()
            .read()
            .records()
            .iter()
            .find(|r| r.id == id)
            .map(detail_view);
        set_detail.set(view);
    };

    view! {
        <section class="restaurant-grid-section">
            {move || {
                if store.listing_loading().get() {
                    return view! {
                        <div class="grid-status loading">
                            <div class="spinner"></div>
                            <p>"Loading restaurants..."</p>
                        </div>
                    }
                    .into_any();
                }
                if let Some(message) = store.listing_error().get() {
                    return view! {
                        <div class="grid-status error">
                            <p>"Error loading restaurants. Please try again later."</p>
                            <p class="error-detail">{message}</p>
                            <button class="retry-btn" on:click=move |_| ctx.reload()>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                let page = store.listing().read().current_page();
                if page.total_pages == 0 {
                    return view! {
                        <div class="grid-status empty">
                            <p>"No restaurants found."</p>
                        </div>
                    }
                    .into_any();
                }
                let cards = card_views(&page);
                view! {
                    <div class="restaurant-grid">
                        <For
                            each=move || cards.clone()
                            key=|card| card.id
                            children=move |card| view! {
                                <RestaurantCard card=card on_details=on_details />
                            }
                        />
                    </div>
                    <PaginationControls />
                }
                .into_any()
            }}

            {move || detail.get().map(|d| view! {
                <RestaurantDetailModal
                    detail=d
                    on_close=move |_: ()| set_detail.set(None)
                />
            })}
        </section>
    }
}
