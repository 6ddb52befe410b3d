//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation goes
//! through the transition methods on [`AppState`].

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::ContactForm;
use crate::models::{Contact, Stats};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Contacts from the last successful list load
    pub contacts: Vec<Contact>,
    /// Ids of cards showing every entry
    pub expanded: HashSet<String>,
    /// Latest aggregate counters, None until the first successful load
    pub stats: Option<Stats>,
    /// Term of the active search, reused when reloading after a mutation
    pub search_term: Option<String>,
    /// Generation of the most recently issued list load
    pub load_generation: u64,
    /// Whether the contact modal is shown
    pub modal_open: bool,
    /// Contact being edited (None = create mode)
    pub current_contact: Option<Contact>,
    /// Inputs of the contact modal
    pub form: ContactForm,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new list load and return its generation
    pub fn begin_load(&mut self, search: Option<&str>) -> u64 {
        self.search_term = search.filter(|term| !term.is_empty()).map(str::to_string);
        self.load_generation += 1;
        self.load_generation
    }

    /// Replace the contact list if `generation` is still the latest load.
    /// Returns false for a stale response, which is dropped.
    pub fn finish_load(&mut self, generation: u64, contacts: Vec<Contact>) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.contacts = contacts;
        true
    }

    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
    }

    pub fn is_expanded(&self, contact_id: &str) -> bool {
        self.expanded.contains(contact_id)
    }

    pub fn toggle_expanded(&mut self, contact_id: &str) {
        if !self.expanded.remove(contact_id) {
            self.expanded.insert(contact_id.to_string());
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Open the modal in create mode (None) or edit mode (Some)
    pub fn open_modal(&mut self, contact: Option<Contact>) {
        self.form = match &contact {
            Some(contact) => ContactForm::from_contact(contact),
            None => ContactForm::blank(),
        };
        self.current_contact = contact;
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.current_contact = None;
    }

    pub fn is_editing(&self) -> bool {
        self.current_contact.is_some()
    }

    pub fn current_contact_id(&self) -> Option<String> {
        self.current_contact.as_ref().map(|c| c.contact_id.clone())
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Access to the application state from async flows.
///
/// Guards are never held across an await: each call reads or writes once.
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn write_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateHandle for AppStore {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}
