//! UI Components
//!
//! Leptos components rendering the store. Event handlers only call
//! manager operations or form transitions.

mod contact_card;
mod contact_grid;
mod contact_modal;
mod list_rows;
mod search_bar;
mod stats_bar;

pub use contact_card::ContactCard;
pub use contact_grid::ContactGrid;
pub use contact_modal::ContactModal;
pub use search_bar::SearchBar;
pub use stats_bar::StatsBar;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` that fired `ev`
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
