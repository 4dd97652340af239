//! Notice Host Component
//!
//! Renders whatever notice is active: success notices as a transient
//! top-corner toast, failures as a blocking dialog the user must acknowledge.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, NoticeKind};

const TOAST_MILLIS: u32 = 2_000;

#[component]
pub fn NoticeHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.notice.get().map(|notice| match notice.kind {
            NoticeKind::Success => {
                spawn_local(async move {
                    TimeoutFuture::new(TOAST_MILLIS).await;
                    ctx.dismiss_notice();
                });
                view! {
                    <div class="toast">{notice.title}</div>
                }
                .into_any()
            }
            NoticeKind::Error => view! {
                <div class="modal-overlay">
                    <div class="modal alert-dialog">
                        <h2 class="modal-title">{notice.title}</h2>
                        <p class="alert-message">{notice.message}</p>
                        <button
                            type="button"
                            class="alert-confirm"
                            on:click=move |_| ctx.dismiss_notice()
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
        })}
    }
}
