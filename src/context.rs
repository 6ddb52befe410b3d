//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchTransport;
use crate::manager::ContactManager;
use crate::notify::BrowserNotifier;
use crate::store::AppStore;

/// Manager wired to the browser: fetch, alert/confirm, reactive store
pub type AppManager = ContactManager<FetchTransport, BrowserNotifier, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    manager: StoredValue<AppManager>,
    /// Delay before a search keystroke is sent
    pub search_debounce_ms: u32,
}

impl AppContext {
    pub fn new(manager: AppManager, search_debounce_ms: u32) -> Self {
        Self {
            manager: StoredValue::new(manager),
            search_debounce_ms,
        }
    }

    /// Run a synchronous manager transition
    pub fn with<R>(&self, f: impl FnOnce(&AppManager) -> R) -> R {
        self.manager.with_value(f)
    }

    /// Run an async manager operation on the event loop
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppManager) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.manager.get_value()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
