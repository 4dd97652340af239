//! Edit Restaurant Modal Component
//!
//! Pre-filled form for one owned listing. The backend write happens first;
//! the local caches are only patched after it succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::models::{Restaurant, RestaurantPatch};
use crate::store::{store_commit_update, use_app_store};

#[component]
pub fn EditRestaurantModal(
    restaurant: Restaurant,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let gateway = use_gateway();
    let store = use_app_store();

    let id = restaurant.id;
    let (name, set_name) = signal(restaurant.name.clone().unwrap_or_default());
    let (description, set_description) = signal(restaurant.description.clone().unwrap_or_default());
    let (location, set_location) = signal(restaurant.location.clone().unwrap_or_default());
    let (contact, set_contact) = signal(restaurant.contact.clone().unwrap_or_default());
    let (hours, set_hours) = signal(restaurant.opening_hours.clone().unwrap_or_default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = RestaurantPatch {
            name: Some(name.get()),
            description: Some(description.get()),
            location: Some(location.get()),
            contact: Some(contact.get()),
            opening_hours: Some(hours.get()),
            image: None,
        };

        let gateway = gateway.clone();
        spawn_local(async move {
            match gateway.update_restaurant(id, &patch).await {
                Ok(()) => {
                    store_commit_update(&store, id, &patch);
                    on_close.run(());
                    ctx.toast("Restaurant Updated!");
                }
                Err(err) => ctx.alert("Update Failed", err.message()),
            }
        });
    };

    view! {
        <Modal title="Edit Restaurant" on_close=on_close>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-field">
                    <label>"Restaurant Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Description"</label>
                    <textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-field">
                    <label>"Location"</label>
                    <input
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Contact"</label>
                    <input
                        type="tel"
                        prop:value=move || contact.get()
                        on:input=move |ev| set_contact.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Opening Hours"</label>
                    <input
                        type="text"
                        prop:value=move || hours.get()
                        on:input=move |ev| set_hours.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="submit-btn">"Save Changes"</button>
            </form>
        </Modal>
    }
}
