//! Contact Modal Component
//!
//! Create/edit form. The mode comes from the store: a current contact means
//! edit, none means create.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::input_value;
use super::list_rows::{ActionRows, EventRows, NoteRows, OpportunityRows};
use crate::context::use_app_context;
use crate::labels;
use crate::store::{use_app_store, AppStateStoreFields};

const MODAL_ID: &str = "contactModal";

/// True when the click landed on the backdrop itself, not inside the dialog
fn is_backdrop_click(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| element.id() == MODAL_ID)
        .unwrap_or(false)
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = store.form();

    let title = move || {
        if store.current_contact().with(|current| current.is_some()) {
            labels::EDIT_CONTACT
        } else {
            labels::NEW_CONTACT
        }
    };

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        if is_backdrop_click(&ev) {
            ctx.with(|manager| manager.close_modal());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        ctx.spawn(move |manager| async move {
            manager.save_contact(&snapshot).await;
        });
    };

    view! {
        <div
            id=MODAL_ID
            class="modal"
            class:active=move || store.modal_open().get()
            on:click=on_backdrop_click
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id="modalTitle">{title}</h2>
                    <button
                        id="closeModal"
                        type="button"
                        class="btn-close"
                        on:click=move |_| ctx.with(|manager| manager.close_modal())
                    >
                        "✕"
                    </button>
                </div>

                <form id="contactForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="nom">{labels::FIELD_NAME}</label>
                        <input
                            id="nom"
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                form.update(|f| f.name = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{labels::FIELD_EMAIL}</label>
                        <input
                            id="email"
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                form.update(|f| f.email = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="entreprise">{labels::FIELD_COMPANY}</label>
                        <input
                            id="entreprise"
                            type="text"
                            prop:value=move || form.with(|f| f.company.clone())
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                form.update(|f| f.company = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="poste">{labels::FIELD_POSITION}</label>
                        <input
                            id="poste"
                            type="text"
                            prop:value=move || form.with(|f| f.position.clone())
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                form.update(|f| f.position = value);
                            }
                        />
                    </div>

                    <EventRows />
                    <NoteRows />
                    <ActionRows />
                    <OpportunityRows />

                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| ctx.with(|manager| manager.close_modal())
                        >
                            {labels::CANCEL}
                        </button>
                        <button type="submit" class="btn btn-primary">{labels::SAVE}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
