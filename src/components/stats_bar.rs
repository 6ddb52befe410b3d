//! Stats Bar Component
//!
//! Three counters from `/api/stats`. Stays blank (or stale) when loading fails.

use leptos::prelude::*;

use crate::format::format_eur;
use crate::labels;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();

    let total_contacts = move || {
        store.stats().with(|stats| stats.as_ref().map(|s| s.total_contacts.to_string()).unwrap_or_default())
    };
    let total_opportunities = move || {
        store.stats().with(|stats| stats.as_ref().map(|s| s.total_opportunities.to_string()).unwrap_or_default())
    };
    let total_value = move || {
        store.stats().with(|stats| stats.as_ref().map(|s| format_eur(s.total_opportunities_value)).unwrap_or_default())
    };

    view! {
        <div class="stats">
            <div class="stat-card">
                <span id="totalContacts" class="stat-value">{total_contacts}</span>
                <span class="stat-label">{labels::STAT_CONTACTS}</span>
            </div>
            <div class="stat-card">
                <span id="totalOpportunites" class="stat-value">{total_opportunities}</span>
                <span class="stat-label">{labels::STAT_OPPORTUNITIES}</span>
            </div>
            <div class="stat-card">
                <span id="valeurTotale" class="stat-value">{total_value}</span>
                <span class="stat-label">{labels::STAT_TOTAL_VALUE}</span>
            </div>
        </div>
    }
}
