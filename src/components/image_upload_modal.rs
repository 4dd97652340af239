//! Image Upload Modal Component
//!
//! Upload a new photo for one owned listing: storage upload, then the row's
//! image column, then the local caches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::models::RestaurantPatch;
use crate::store::{store_commit_update, use_app_store};

#[component]
pub fn ImageUploadModal(
    restaurant_id: u32,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let gateway = use_gateway();
    let store = use_app_store();

    let (image_file, set_image_file) = signal_local::<Option<web_sys::File>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = image_file.get() else {
            ctx.alert("Upload Failed", "No image selected");
            return;
        };

        let gateway = gateway.clone();
        spawn_local(async move {
            let uploaded: Result<_, crate::error::GatewayError> = async {
                let url = gateway.upload_image(&file).await?;
                gateway
                    .update_restaurant(restaurant_id, &RestaurantPatch::image_only(&url))
                    .await?;
                Ok(url)
            }
            .await;

            match uploaded {
                Ok(url) => {
                    store_commit_update(&store, restaurant_id, &RestaurantPatch::image_only(url));
                    on_close.run(());
                    ctx.toast("Image Uploaded!");
                }
                Err(err) => ctx.alert("Upload Failed", err.message()),
            }
        });
    };

    view! {
        <Modal title="Upload Restaurant Image" on_close=on_close>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-field">
                    <label>"Select Image"</label>
                    <input
                        type="file"
                        accept="image/*"
                        required=true
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_image_file.set(input.files().and_then(|files| files.get(0)));
                        }
                    />
                </div>
                <button type="submit" class="submit-btn">"Upload"</button>
            </form>
        </Modal>
    }
}
