//! Repeatable Form Rows
//!
//! One editor per sub-list. Rows are keyed, so adding or removing a row
//! never re-creates the inputs of the others.

use leptos::prelude::*;

use super::input_value;
use crate::form::{RowKey, SubList};
use crate::labels;
use crate::store::{use_app_store, AppStateStoreFields};

/// Single input bound to one field of one row
#[component]
fn RowInput(
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=required
            step=step
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(input_value(&ev))
        />
    }
}

#[component]
fn RemoveRowButton(list: SubList, key: RowKey) -> impl IntoView {
    let form = use_app_store().form();
    view! {
        <button
            type="button"
            class="btn-remove"
            on:click=move |_| form.update(|f| {
                f.remove_row(list, key);
            })
        >
            {labels::REMOVE_ROW}
        </button>
    }
}

/// Titled list container with its add button
#[component]
fn ListSection(
    title: &'static str,
    list_id: &'static str,
    list: SubList,
    add_label: &'static str,
    children: Children,
) -> impl IntoView {
    let form = use_app_store().form();
    view! {
        <div class="form-group">
            <label>{title}</label>
            <div id=list_id class="dynamic-list">{children()}</div>
            <button
                type="button"
                class="btn-add"
                on:click=move |_| form.update(|f| {
                    f.add_row(list);
                })
            >
                {add_label}
            </button>
        </div>
    }
}

#[component]
pub fn EventRows() -> impl IntoView {
    let form = use_app_store().form();
    let field = move |key: RowKey, read: fn(&crate::form::EventRow) -> String| {
        Signal::derive(move || form.with(|f| f.events.get(key).map(read).unwrap_or_default()))
    };

    view! {
        <ListSection title=labels::LIST_EVENTS list_id="evenementsList" list=SubList::Events add_label=labels::ADD_EVENT>
            <For
                each=move || form.with(|f| f.events.keys())
                key=|key| *key
                children=move |key| view! {
                    <div class="list-item" data-key=key.to_string()>
                        <RowInput
                            input_type="date"
                            placeholder=labels::PLACEHOLDER_DATE
                            required=true
                            value=field(key, |row| row.date.clone())
                            on_change=move |value: String| form.update(|f| f.events.update(key, |row| row.date = value))
                        />
                        <RowInput
                            input_type="text"
                            placeholder=labels::PLACEHOLDER_TYPE
                            required=true
                            value=field(key, |row| row.kind.clone())
                            on_change=move |value: String| form.update(|f| f.events.update(key, |row| row.kind = value))
                        />
                        <RowInput
                            input_type="text"
                            placeholder=labels::PLACEHOLDER_NOTES
                            required=true
                            value=field(key, |row| row.notes.clone())
                            on_change=move |value: String| form.update(|f| f.events.update(key, |row| row.notes = value))
                        />
                        <RemoveRowButton list=SubList::Events key=key />
                    </div>
                }
            />
        </ListSection>
    }
}

#[component]
pub fn NoteRows() -> impl IntoView {
    let form = use_app_store().form();

    view! {
        <ListSection title=labels::LIST_NOTES list_id="notesList" list=SubList::Notes add_label=labels::ADD_NOTE>
            <For
                each=move || form.with(|f| f.notes.keys())
                key=|key| *key
                children=move |key| view! {
                    <div class="list-item" data-key=key.to_string()>
                        <RowInput
                            input_type="text"
                            placeholder=labels::PLACEHOLDER_NOTE
                            required=true
                            value=Signal::derive(move || form.with(|f| f.notes.get(key).cloned().unwrap_or_default()))
                            on_change=move |value: String| form.update(|f| f.notes.update(key, |note| *note = value))
                        />
                        <RemoveRowButton list=SubList::Notes key=key />
                    </div>
                }
            />
        </ListSection>
    }
}

#[component]
pub fn ActionRows() -> impl IntoView {
    let form = use_app_store().form();
    let field = move |key: RowKey, read: fn(&crate::form::ActionRow) -> String| {
        Signal::derive(move || form.with(|f| f.actions.get(key).map(read).unwrap_or_default()))
    };

    view! {
        <ListSection title=labels::LIST_ACTIONS list_id="actionsList" list=SubList::Actions add_label=labels::ADD_ACTION>
            <For
                each=move || form.with(|f| f.actions.keys())
                key=|key| *key
                children=move |key| view! {
                    <div class="list-item" data-key=key.to_string()>
                        <RowInput
                            input_type="text"
                            placeholder=labels::PLACEHOLDER_ACTION
                            required=true
                            value=field(key, |row| row.action.clone())
                            on_change=move |value: String| form.update(|f| f.actions.update(key, |row| row.action = value))
                        />
                        <RowInput
                            input_type="date"
                            placeholder=labels::PLACEHOLDER_DUE_DATE
                            required=true
                            value=field(key, |row| row.due_date.clone())
                            on_change=move |value: String| form.update(|f| f.actions.update(key, |row| row.due_date = value))
                        />
                        <RemoveRowButton list=SubList::Actions key=key />
                    </div>
                }
            />
        </ListSection>
    }
}

#[component]
pub fn OpportunityRows() -> impl IntoView {
    let form = use_app_store().form();
    let field = move |key: RowKey, read: fn(&crate::form::OpportunityRow) -> String| {
        Signal::derive(move || form.with(|f| f.opportunities.get(key).map(read).unwrap_or_default()))
    };

    view! {
        <ListSection
            title=labels::LIST_OPPORTUNITIES
            list_id="opportunitesList"
            list=SubList::Opportunities
            add_label=labels::ADD_OPPORTUNITY
        >
            <For
                each=move || form.with(|f| f.opportunities.keys())
                key=|key| *key
                children=move |key| view! {
                    <div class="list-item" data-key=key.to_string()>
                        <RowInput
                            input_type="text"
                            placeholder=labels::PLACEHOLDER_PROJECT
                            required=true
                            value=field(key, |row| row.project.clone())
                            on_change=move |value: String| form.update(|f| f.opportunities.update(key, |row| row.project = value))
                        />
                        <RowInput
                            input_type="number"
                            placeholder=labels::PLACEHOLDER_VALUE
                            step="0.01"
                            value=field(key, |row| row.estimated_value.clone())
                            on_change=move |value: String| form.update(|f| f.opportunities.update(key, |row| row.estimated_value = value))
                        />
                        <RemoveRowButton list=SubList::Opportunities key=key />
                    </div>
                }
            />
        </ListSection>
    }
}
