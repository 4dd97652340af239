//! DineFinder App
//!
//! Root component: owns the store, gateway, session, and app context, runs
//! the initial auth check and the listing load, and switches between the two
//! pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{HomePage, NavBar, NoticeHost, ProfilePage};
use crate::config::GatewayConfig;
use crate::context::{AppContext, Notice, Page};
use crate::gateway::Gateway;
use crate::session::{self, CurrentUser, Session};
use crate::store::{store_listing_failed, store_listing_loaded, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let gateway = Gateway::new(GatewayConfig::from_env());
    provide_context(gateway.clone());

    let ctx = AppContext::new(
        signal(0u32),
        signal(Page::Home),
        signal::<Option<Notice>>(None),
    );
    provide_context(ctx);

    let session = Session::new(signal::<Option<CurrentUser>>(None), signal(true));
    provide_context(session);

    // Initial auth check: resolve any stored token to a user.
    {
        let gateway = gateway.clone();
        Effect::new(move |_| {
            let gateway = gateway.clone();
            spawn_local(async move {
                match session::restore(&gateway).await {
                    Ok(user) => session.set_user(user),
                    // A rejected stored token is routine; anything else is worth a log line.
                    Err(err) => {
                        if !err.is_auth() {
                            web_sys::console::error_1(
                                &format!("[APP] auth check failed: {err}").into(),
                            );
                        }
                        session.set_user(None);
                    }
                }
                session.finish_check();
            });
        });
    }

    // Load the public listing on mount and whenever a reload is triggered.
    {
        let gateway = gateway.clone();
        Effect::new(move |_| {
            let trigger = ctx.reload_trigger.get();
            web_sys::console::log_1(
                &format!("[APP] loading restaurants, trigger={trigger}").into(),
            );
            store.listing_loading().set(true);
            let gateway = gateway.clone();
            spawn_local(async move {
                match gateway.list_restaurants().await {
                    Ok(rows) => {
                        web_sys::console::log_1(
                            &format!("[APP] loaded {} restaurants", rows.len()).into(),
                        );
                        store_listing_loaded(&store, rows);
                    }
                    Err(err) => {
                        store_listing_failed(&store, err.message().to_string());
                        ctx.alert("Failed to Load Restaurants", err.message());
                    }
                }
            });
        });
    }

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                }}
            </main>
            <NoticeHost />
        </div>
    }
}
