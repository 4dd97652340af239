//! Modal Scaffold Component
//!
//! Overlay plus titled dialog box; every form modal wraps itself in this.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2 class="modal-title">{title}</h2>
                {children()}
                <button
                    type="button"
                    class="modal-cancel"
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
