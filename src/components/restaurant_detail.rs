//! Restaurant Detail Modal Component
//!
//! Full record view: image, rating, location/contact/hours, and the menu list
//! with an explicit empty state.

use leptos::prelude::*;

use crate::render::DetailView;

#[component]
pub fn RestaurantDetailModal(
    detail: DetailView,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal detail-modal">
                <img src=detail.image.clone() alt=detail.name.clone() class="detail-image" />
                <div class="detail-body">
                    <div class="detail-header">
                        <div>
                            <h2 class="detail-title">{detail.name.clone()}</h2>
                            <p class="detail-description">{detail.description.clone()}</p>
                        </div>
                        <span class="detail-rating">{format!("\u{2605} {}", detail.rating)}</span>
                    </div>
                    <div class="detail-columns">
                        <div>
                            <h3>"Location & Contact"</h3>
                            <p>{detail.location.clone()}</p>
                            <p>{detail.contact.clone()}</p>
                            <p>{detail.opening_hours.clone()}</p>
                        </div>
                        <div>
                            <h3>"Popular Menu Items"</h3>
                            <ul class="menu-list">
                                {if detail.menu.is_empty() {
                                    view! { <li class="menu-empty">"No menu items listed"</li> }
                                        .into_any()
                                } else {
                                    detail
                                        .menu
                                        .iter()
                                        .map(|item| view! { <li>{item.clone()}</li> })
                                        .collect_view()
                                        .into_any()
                                }}
                            </ul>
                        </div>
                    </div>
                    <button
                        type="button"
                        class="modal-cancel"
                        on:click=move |_| on_close.run(())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
