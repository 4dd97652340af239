//! Add Restaurant Modal Component
//!
//! Create a listing for the signed-in owner. Name, description, and location
//! are required. An optional image file is uploaded first; if that fails the
//! insert is aborted. Without a file the row gets a stock photo URL.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::models::NewRestaurant;
use crate::render::DEFAULT_LISTING_IMAGE;
use crate::session::use_session;
use crate::store::{store_commit_insert, use_app_store};

#[component]
pub fn AddRestaurantModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let gateway = use_gateway();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (hours, set_hours) = signal(String::new());
    let (image_file, set_image_file) = signal_local::<Option<web_sys::File>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = session.user.get() else {
            ctx.alert("Failed to Add Restaurant", "User not properly authenticated");
            return;
        };
        let name = name.get();
        let description = description.get();
        let location = location.get();
        if name.is_empty() || description.is_empty() || location.is_empty() {
            ctx.alert("Missing Fields", "Please fill in all required fields");
            return;
        }
        let contact = contact.get();
        let hours = hours.get();
        let file = image_file.get();

        let gateway = gateway.clone();
        spawn_local(async move {
            // Upload first; a failed upload aborts the whole add.
            let image = match &file {
                Some(file) => match gateway.upload_image(file).await {
                    Ok(url) => url,
                    Err(err) => {
                        ctx.alert(
                            "Failed to Add Restaurant",
                            format!("Image upload error: {}", err.message()),
                        );
                        return;
                    }
                },
                None => DEFAULT_LISTING_IMAGE.to_string(),
            };

            let row = NewRestaurant {
                name,
                description,
                location,
                contact,
                opening_hours: hours,
                image,
                owner_id: user.owner_id,
            };
            match gateway.insert_restaurant(&row).await {
                Ok(record) => {
                    store_commit_insert(&store, record);
                    on_close.run(());
                    ctx.toast("Restaurant Added Successfully!");
                }
                Err(err) => ctx.alert("Failed to Add Restaurant", err.message()),
            }
        });
    };

    view! {
        <Modal title="Add Restaurant" on_close=on_close>
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
                <div class="form-field">
                    <label>"Image (optional)"</label>
                    <input
                        type="file"
                        accept="image/*"
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_image_file.set(input.files().and_then(|files| files.get(0)));
                        }
                    />
                </div>
                <button type="submit" class="submit-btn">"Add Restaurant"</button>
            </form>
        </Modal>
    }
}
