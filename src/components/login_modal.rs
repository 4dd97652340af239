//! Login Modal Component
//!
//! Password sign-in. On success the owner row is resolved and the session is
//! populated; the modal only closes on success so a failed attempt keeps the
//! typed email around.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::gateway::use_gateway;
use crate::session::{merge_user, use_session};

#[component]
pub fn LoginModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let gateway = use_gateway();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            ctx.alert("Missing Fields", "Please fill all fields");
            return;
        }

        let gateway = gateway.clone();
        spawn_local(async move {
            let signed_in: Result<_, crate::error::GatewayError> = async {
                let auth_user = gateway.sign_in(&email, &password).await?;
                let owner = gateway.owner_by_auth_id(&auth_user.id).await?;
                Ok(merge_user(auth_user, owner))
            }
            .await;

            match signed_in {
                Ok(user) => {
                    session.set_user(Some(user));
                    set_password.set(String::new());
                    on_close.run(());
                    ctx.toast("Login successful!");
                }
                Err(err) => ctx.alert("Login Failed", err.message()),
            }
        });
    };

    view! {
        <Modal title="Login" on_close=on_close>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
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
                <button type="submit" class="submit-btn">"Login"</button>
            </form>
        </Modal>
    }
}
