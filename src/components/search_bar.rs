//! Search Bar Component
//!
//! Server-side search, debounced: only the last keystroke within the delay
//! issues a request.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::input_value;
use crate::context::use_app_context;
use crate::labels;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let latest_keystroke = StoredValue::new(0u64);

    let on_input = move |ev: web_sys::Event| {
        let term = input_value(&ev);
        let ticket = latest_keystroke.get_value() + 1;
        latest_keystroke.set_value(ticket);
        let delay = ctx.search_debounce_ms;

        ctx.spawn(move |manager| async move {
            TimeoutFuture::new(delay).await;
            if latest_keystroke.try_get_value() == Some(ticket) {
                manager.search_contacts(&term).await;
            }
        });
    };

    view! {
        <input
            id="searchInput"
            type="search"
            class="search-input"
            placeholder=labels::SEARCH_PLACEHOLDER
            on:input=on_input
        />
    }
}
