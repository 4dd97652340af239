//! Application Context
//!
//! Shared signals provided via Leptos Context API: which page is showing,
//! the listing reload trigger, and the notice (toast / blocking error dialog)
//! currently on screen.

use leptos::prelude::*;

/// The two pages of the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// Public landing page with the restaurant grid
    #[default]
    Home,
    /// Owner dashboard; requires a session
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Transient top-corner toast, auto-dismissed
    Success,
    /// Blocking dialog the user has to acknowledge
    Error,
}

/// One on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the public listing - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the public listing - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Notice on screen, if any - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Notice on screen - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            page: page.0,
            set_page: page.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Trigger a reload of the public listing
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch pages. Auth failures land here too (back to `Page::Home`).
    pub fn go_to(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Show a transient success toast.
    pub fn toast(&self, title: impl Into<String>) {
        self.set_notice.set(Some(Notice {
            kind: NoticeKind::Success,
            title: title.into(),
            message: String::new(),
        }));
    }

    /// Show a blocking error dialog naming the failure.
    pub fn alert(&self, title: impl Into<String>, message: impl Into<String>) {
        self.set_notice.set(Some(Notice {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context; panics outside the component tree.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
