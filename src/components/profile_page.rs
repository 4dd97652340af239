//! Profile Page Component
//!
//! Owner dashboard: account header, owned-listing grid, and the add/edit/
//! upload/profile modals. Anyone without a session is sent back to the
//! landing page; a failed profile load shows the failure and does the same.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    AddRestaurantModal, EditProfileModal, EditRestaurantModal, ImageUploadModal,
    OwnerRestaurantCard,
};
use crate::context::{use_app_context, Page};
use crate::gateway::use_gateway;
use crate::models::Restaurant;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let gateway = use_gateway();
    let store = use_app_store();

    let (show_add, set_show_add) = signal(false);
    let (show_edit_profile, set_show_edit_profile) = signal(false);
    let (editing, set_editing) = signal::<Option<Restaurant>>(None);
    let (uploading_for, set_uploading_for) = signal::<Option<u32>>(None);

    // No session, no dashboard.
    Effect::new(move |_| {
        if !session.checking.get() && session.user.get().is_none() {
            ctx.go_to(Page::Home);
        }
    });

    // Load this owner's listings.
    Effect::new(move |_| {
        let Some(user) = session.user.get() else {
            return;
        };
        let gateway = gateway.clone();
        spawn_local(async move {
            match gateway.restaurants_by_owner(user.owner_id).await {
                Ok(rows) => {
                    web_sys::console::log_1(
                        &format!("[PROFILE] loaded {} owned restaurants", rows.len()).into(),
                    );
                    store.my_restaurants().set(rows);
                }
                Err(err) => {
                    ctx.alert("Error Loading Profile", err.message());
                    ctx.go_to(Page::Home);
                }
            }
        });
    });

    view! {
        <div class="profile-page">
            {move || session.user.get().map(|user| {
                let phone = user.phone.clone().unwrap_or_else(|| "Not provided".to_string());
                view! {
                    <header class="profile-header">
                        <h1 class="owner-name">{user.name.clone()}</h1>
                        <p class="owner-email">{user.email.clone()}</p>
                        <p class="owner-phone">{phone}</p>
                        <div class="profile-actions">
                            <button class="edit-profile-btn" on:click=move |_| set_show_edit_profile.set(true)>
                                "Edit Profile"
                            </button>
                            <button class="add-restaurant-btn" on:click=move |_| set_show_add.set(true)>
                                "Add Restaurant"
                            </button>
                        </div>
                    </header>
                }
            })}

            <section class="owner-restaurants">
                <h2>"My Restaurants"</h2>
                {move || {
                    if store.my_restaurants().read().is_empty() {
                        return view! {
                            <p class="grid-status empty">"No restaurants added yet"</p>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="restaurant-grid">
                            <For
                                each=move || store.my_restaurants().get()
                                key=|r| r.id
                                children=move |restaurant| view! {
                                    <OwnerRestaurantCard
                                        restaurant=restaurant
                                        on_edit=move |r: Restaurant| set_editing.set(Some(r))
                                        on_upload=move |id: u32| set_uploading_for.set(Some(id))
                                    />
                                }
                            />
                        </div>
                    }
                    .into_any()
                }}
            </section>

            <Show when=move || show_add.get()>
                <AddRestaurantModal on_close=move |_: ()| set_show_add.set(false) />
            </Show>
            {move || editing.get().map(|restaurant| view! {
                <EditRestaurantModal
                    restaurant=restaurant
                    on_close=move |_: ()| set_editing.set(None)
                />
            })}
            {move || uploading_for.get().map(|id| view! {
                <ImageUploadModal
                    restaurant_id=id
                    on_close=move |_: ()| set_uploading_for.set(None)
                />
            })}
            {move || match (show_edit_profile.get(), session.user.get()) {
                (true, Some(user)) => Some(view! {
                    <EditProfileModal
                        user=user
                        on_close=move |_: ()| set_show_edit_profile.set(false)
                    />
                }),
                _ => None,
            }}
        </div>
    }
}
