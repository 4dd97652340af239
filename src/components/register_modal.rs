//! Register Modal Component
//!
//! Owner signup: client-side field and password-confirmation checks, then an
//! auth account with name/phone metadata plus the matching owner row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::models::NewOwner;
use crate::session::{use_session, CurrentUser};

#[component]
pub fn RegisterModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let gateway = use_gateway();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let email = email.get();
        let phone = phone.get();
        let password = password.get();
        let confirm = confirm.get();

        if name.is_empty()
            || email.is_empty()
            || phone.is_empty()
            || password.is_empty()
            || confirm.is_empty()
        {
            ctx.alert("Missing Fields", "Please fill all fields");
            return;
        }
        if password != confirm {
            ctx.alert("Password Mismatch", "Passwords do not match");
            return;
        }

        let gateway = gateway.clone();
        spawn_local(async move {
            let registered: Result<_, crate::error::GatewayError> = async {
                let auth_user = gateway.sign_up(&email, &password, &name, &phone).await?;
                let owner = gateway
                    .insert_owner(&NewOwner {
                        auth_id: auth_user.id.clone(),
                        name: name.clone(),
                        email: email.clone(),
                        phone: phone.clone(),
                    })
                    .await?;
                Ok((auth_user, owner))
            }
            .await;

            match registered {
                Ok((auth_user, owner)) => {
                    session.set_user(Some(CurrentUser {
                        auth_id: auth_user.id,
                        owner_id: owner.id,
                        name,
                        email,
                        phone: Some(phone),
                    }));
                    on_close.run(());
                    ctx.toast("Registration Successful!");
                }
                Err(err) => ctx.alert("Registration Failed", err.message()),
            }
        });
    };

    view! {
        <Modal title="Register Your Restaurant" on_close=on_close>
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
                <div class="form-field">
                    <label>"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Confirm Password"</label>
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="submit-btn">"Register"</button>
            </form>
        </Modal>
    }
}
