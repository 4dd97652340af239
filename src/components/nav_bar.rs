//! Navigation Bar Component
//!
//! Brand link plus auth-dependent affordances: Login/Register while signed
//! out, Profile/Logout while signed in, and a small indicator while the
//! initial auth check is still in flight. Owns the login and register modals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoginModal, RegisterModal};
use crate::context::{use_app_context, Page};
use crate::gateway::use_gateway;
use crate::session::use_session;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let gateway = use_gateway();

    let (show_login, set_show_login) = signal(false);
    let (show_register, set_show_register) = signal(false);

    view! {
        <nav class="nav-bar">
            <a class="brand" on:click=move |_| ctx.go_to(Page::Home)>
                "DineFinder"
            </a>
            <div class="auth-container">
                {move || if session.checking.get() {
                    view! {
                        <div class="auth-loading">
                            <div class="spinner small"></div>
                            <span>"Loading..."</span>
                        </div>
                    }
                    .into_any()
                } else if session.is_signed_in() {
                    let gateway = gateway.clone();
                    let on_logout = move |_: web_sys::MouseEvent| {
                        let gateway = gateway.clone();
                        spawn_local(async move {
                            match gateway.sign_out().await {
                                Ok(()) => {
                                    session.clear();
                                    ctx.go_to(Page::Home);
                                    ctx.toast("Logged out successfully!");
                                }
                                Err(err) => ctx.alert("Logout Failed", err.message()),
                            }
                        });
                    };
                    view! {
                        <a class="nav-link profile-link" on:click=move |_| ctx.go_to(Page::Profile)>
                            "Profile"
                        </a>
                        <button class="nav-link logout-btn" on:click=on_logout>
                            "Logout"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button class="nav-link login-btn" on:click=move |_| set_show_login.set(true)>
                            "Login"
                        </button>
                        <button class="nav-link register-btn" on:click=move |_| set_show_register.set(true)>
                            "Register"
                        </button>
                    }
                    .into_any()
                }}
            </div>
        </nav>

        <Show when=move || show_login.get()>
            <LoginModal on_close=move |_: ()| set_show_login.set(false) />
        </Show>
        <Show when=move || show_register.get()>
            <RegisterModal on_close=move |_: ()| set_show_register.set(false) />
        </Show>
    }
}
