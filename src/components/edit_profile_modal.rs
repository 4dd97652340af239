//! Edit Profile Modal Component
//!
//! Account details form, pre-filled from the current session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::models::OwnerPatch;
use crate::session::{use_session, CurrentUser};

#[component]
pub fn EditProfileModal(
    user: CurrentUser,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let gateway = use_gateway();

    let auth_id = user.auth_id.clone();
    let owner_id = user.owner_id;
    let (name, set_name) = signal(user.name.clone());
    let (email, set_email) = signal(user.email.clone());
    let (phone, set_phone) = signal(user.phone.clone().unwrap_or_default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = OwnerPatch {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
        };

        let gateway = gateway.clone();
        let auth_id = auth_id.clone();
        spawn_local(async move {
            match gateway.update_owner(owner_id, &patch).await {
                Ok(()) => {
                    session.set_user(Some(CurrentUser {
                        auth_id,
                        owner_id,
                        name: patch.name,
                        email: patch.email,
                        phone: Some(patch.phone).filter(|p| !p.is_empty()),
                    }));
                    on_close.run(());
                    ctx.toast("Profile Updated!");
                }
                Err(err) => ctx.alert("Update Failed", err.message()),
            }
        });
    };

    view! {
        <Modal title="Edit Profile" on_close=on_close>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-field">
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Phone"</label>
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="submit-btn">"Save Changes"</button>
            </form>
        </Modal>
    }
}
