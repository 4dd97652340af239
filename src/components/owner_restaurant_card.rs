//! Owner Restaurant Card Component
//!
//! Card on the profile page with Edit/Delete and an image-upload button over
//! the photo. Delete goes through an inline are-you-sure step, then calls the
//! gateway itself and removes the row from the caches on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::models::Restaurant;
use crate::render::detail_view;
use crate::store::{store_commit_remove, use_app_store};

#[component]
pub fn OwnerRestaurantCard(
    restaurant: Restaurant,
    #[prop(into)] on_edit: Callback<Restaurant>,
    #[prop(into)] on_upload: Callback<u32>,
) -> impl IntoView {
    let ctx = use_app_context();
    let gateway = use_gateway();
    let store = use_app_store();

    let id = restaurant.id;
    let view_data = detail_view(&restaurant);
    let (confirm_delete, set_confirm_delete) = signal(false);

    let on_delete = move |_: web_sys::MouseEvent| {
        set_confirm_delete.set(false);
        let gateway = gateway.clone();
        spawn_local(async move {
            match gateway.delete_restaurant(id).await {
                Ok(()) => {
                    store_commit_remove(&store, id);
                    ctx.toast("Restaurant Deleted!");
                }
                Err(err) => ctx.alert("Delete Failed", err.message()),
            }
        });
    };

    view! {
        <div class="restaurant-card owner-card">
            <div class="card-image-wrap">
                <img src=view_data.image.clone() alt=view_data.name.clone() class="card-image" />
                <button class="upload-btn" on:click=move |_| on_upload.run(id)>
                    "+"
                </button>
            </div>
            <div class="card-body">
                <h3 class="card-title">{view_data.name.clone()}</h3>
                <p class="card-description">{view_data.description.clone()}</p>
                <p class="card-location">{view_data.location.clone()}</p>
                <p class="card-contact">{view_data.contact.clone()}</p>
                <p class="card-hours">{view_data.opening_hours.clone()}</p>
                <div class="card-actions">
                    <button
                        class="edit-btn"
                        on:click=move |_| on_edit.run(restaurant.clone())
                    >
                        "Edit"
                    </button>
                    {move || if confirm_delete.get() {
                        let on_delete = on_delete.clone();
                        view! {
                            <span class="delete-confirm">
                                <span class="delete-confirm-text">
                                    "Are you sure? You won't be able to revert this!"
                                </span>
                                <button class="confirm-btn" on:click=on_delete>
                                    "Yes, delete it!"
                                </button>
                                <button
                                    class="cancel-btn"
                                    on:click=move |_| set_confirm_delete.set(false)
                                >
                                    "Cancel"
                                </button>
                            </span>
                        }
                        .into_any()
                    } else {
                        view! {
                            <button
                                class="delete-btn"
                                on:click=move |_| set_confirm_delete.set(true)
                            >
                                "Delete"
                            </button>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
