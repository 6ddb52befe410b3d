//! Contact Manager App
//!
//! Root component: header with stats, toolbar, card grid and the modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, FetchTransport};
use crate::components::{ContactGrid, ContactModal, SearchBar, StatsBar};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::labels;
use crate::manager::ContactManager;
use crate::notify::BrowserNotifier;
use crate::store::AppState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    let api = ApiClient::new(FetchTransport, config.api_base.clone());
    let ctx = AppContext::new(
        ContactManager::new(api, BrowserNotifier, store),
        config.search_debounce_ms,
    );
    provide_context(ctx);

    // Load contacts then stats on mount
    Effect::new(move |_| {
        log::info!("mounting, api base {:?}", config.api_base);
        ctx.spawn(|manager| async move {
            manager.init().await;
        });
    });

    view! {
        <div class="container">
            <header class="header">
                <h1>{labels::APP_TITLE}</h1>
                <StatsBar />
            </header>

            <div class="toolbar">
                <SearchBar />
                <button
                    id="collapseAllBtn"
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| ctx.with(|manager| manager.collapse_all())
                >
                    {labels::COLLAPSE_ALL}
                </button>
                <button
                    id="newContactBtn"
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.with(|manager| manager.open_create())
                >
                    "+ " {labels::NEW_CONTACT}
                </button>
            </div>

            <ContactGrid />
            <ContactModal />
        </div>
    }
}
