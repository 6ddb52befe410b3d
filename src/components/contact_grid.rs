//! Contact Grid Component

use leptos::prelude::*;

use super::ContactCard;
use crate::labels;
use crate::render::{render_grid, GridView};
use crate::store::{use_app_store, AppStateStoreFields};

/// Card grid, or the empty-state placeholder when there are no contacts
#[component]
pub fn ContactGrid() -> impl IntoView {
    let store = use_app_store();

    let grid = move || {
        store
            .contacts()
            .with(|contacts| store.expanded().with(|expanded| render_grid(contacts, expanded)))
    };

    view! {
        <div id="contactsContainer" class="contacts-grid">
            {move || match grid() {
                GridView::Empty => view! { <EmptyState /> }.into_any(),
                GridView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ContactCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">"📇"</div>
            <h3>{labels::EMPTY_TITLE}</h3>
            <p>{labels::EMPTY_HINT}</p>
        </div>
    }
}
