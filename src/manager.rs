//! Contact Manager
//!
//! Data synchronization between the API and the application state. Every
//! mutation is followed by a full reload of the list and the stats; failures
//! become notices and log lines here and nowhere else.

use crate::api::{ApiClient, Transport};
use crate::form::ContactForm;
use crate::labels;
use crate::notify::Notifier;
use crate::store::StateHandle;

#[derive(Debug, Clone)]
pub struct ContactManager<T, N, S> {
    api: ApiClient<T>,
    notifier: N,
    state: S,
}

impl<T, N, S> ContactManager<T, N, S>
where
    T: Transport,
    N: Notifier,
    S: StateHandle,
{
    pub fn new(api: ApiClient<T>, notifier: N, state: S) -> Self {
        Self { api, notifier, state }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// First load after mount
    pub async fn init(&self) {
        self.load_contacts(None).await;
        self.load_stats().await;
    }

    /// Replace the contact list with the server's, optionally filtered.
    /// On failure the previous list stays and the user is told.
    pub async fn load_contacts(&self, search: Option<&str>) -> bool {
        let generation = self.state.write_state(|s| s.begin_load(search));
        match self.api.list_contacts(search).await {
            Ok(contacts) => {
                let count = contacts.len();
                if self.state.write_state(|s| s.finish_load(generation, contacts)) {
                    log::info!("loaded {} contacts (search={:?})", count, search);
                } else {
                    log::debug!("dropped stale contact list (generation {})", generation);
                }
                true
            }
            Err(e) => {
                log::error!("failed to load contacts: {}", e);
                self.notifier.error(labels::LOAD_CONTACTS_FAILED);
                false
            }
        }
    }

    /// Reload with the active search term
    pub async fn reload(&self) -> bool {
        let term = self.state.read_state(|s| s.search_term.clone());
        self.load_contacts(term.as_deref()).await
    }

    /// Server-side search; an empty term lists everything
    pub async fn search_contacts(&self, term: &str) -> bool {
        self.load_contacts(Some(term)).await
    }

    /// Stats are cosmetic: failures are logged only
    pub async fn load_stats(&self) -> bool {
        match self.api.stats().await {
            Ok(stats) => {
                self.state.write_state(|s| s.set_stats(stats));
                true
            }
            Err(e) => {
                log::warn!("failed to load stats: {}", e);
                false
            }
        }
    }

    /// Create or update depending on the modal mode.
    /// The modal stays open on failure so the user can retry.
    pub async fn save_contact(&self, form: &ContactForm) -> bool {
        let payload = form.to_payload();
        let current_id = self.state.read_state(|s| s.current_contact_id());

        let result = match &current_id {
            Some(id) => self.api.update_contact(id, &payload).await,
            None => self.api.create_contact(&payload).await,
        };

        match result {
            Ok(saved) => {
                log::info!("saved contact {}", saved.contact_id);
                self.state.write_state(|s| s.close_modal());
                self.reload().await;
                self.load_stats().await;
                self.notifier.success(if current_id.is_some() {
                    labels::CONTACT_UPDATED
                } else {
                    labels::CONTACT_CREATED
                });
                true
            }
            Err(e) => {
                log::error!("failed to save contact: {}", e);
                self.notifier.error(labels::SAVE_FAILED);
                false
            }
        }
    }

    /// Delete after explicit confirmation; declining issues no request
    pub async fn delete_contact(&self, id: &str) -> bool {
        if !self.notifier.confirm(labels::CONFIRM_DELETE) {
            return false;
        }

        match self.api.delete_contact(id).await {
            Ok(()) => {
                log::info!("deleted contact {}", id);
                self.reload().await;
                self.load_stats().await;
                self.notifier.success(labels::CONTACT_DELETED);
                true
            }
            Err(e) => {
                log::error!("failed to delete contact {}: {}", id, e);
                self.notifier.error(labels::DELETE_FAILED);
                false
            }
        }
    }

    /// Fetch a fresh copy and open the modal in edit mode
    pub async fn edit_contact(&self, id: &str) -> bool {
        match self.api.get_contact(id).await {
            Ok(contact) => {
                self.state.write_state(|s| s.open_modal(Some(contact)));
                true
            }
            Err(e) => {
                log::error!("failed to load contact {}: {}", id, e);
                self.notifier.error(labels::LOAD_CONTACT_FAILED);
                false
            }
        }
    }

    pub fn open_create(&self) {
        self.state.write_state(|s| s.open_modal(None));
    }

    pub fn close_modal(&self) {
        self.state.write_state(|s| s.close_modal());
    }

    pub fn toggle_card_view(&self, id: &str) {
        self.state.write_state(|s| s.toggle_expanded(id));
    }

    pub fn collapse_all(&self) {
        self.state.write_state(|s| s.collapse_all());
    }
}
