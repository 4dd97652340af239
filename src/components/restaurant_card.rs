//! Restaurant Card Component
//!
//! One card of the public grid; all fallback text was already substituted by
//! the renderer.

use leptos::prelude::*;

use crate::render::CardView;

#[component]
pub fn RestaurantCard(
    card: CardView,
    #[prop(into)] on_details: Callback<u32>,
) -> impl IntoView {
    let id = card.id;

    view! {
        <div class="restaurant-card">
            <img src=card.image.clone() alt=card.name.clone() class="card-image" />
            <div class="card-body">
                <h3 class="card-title">{card.name.clone()}</h3>
                <p class="card-description">{card.description.clone()}</p>
                <p class="card-location">{card.location.clone()}</p>
                <button class="details-btn" on:click=move |_| on_details.run(id)>
                    "View Details"
                </button>
            </div>
        </div>
    }
}
