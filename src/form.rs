//! Contact Form Model
//!
//! Editable state behind the contact modal: the four top-level inputs and
//! the four repeatable sub-lists. Every row keeps its raw input text; typed
//! values are only produced when the form is turned into a payload.

use crate::format::{date_input_value, to_iso_timestamp};
use crate::models::{Action, Contact, ContactPayload, Event, Opportunity};

/// Stable identity of a row within its list
pub type RowKey = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub key: RowKey,
    pub value: T,
}

/// Ordered rows with keys that are never reused
#[derive(Debug, Clone, PartialEq)]
pub struct RowList<T> {
    rows: Vec<Row<T>>,
    next_key: RowKey,
}

impl<T> Default for RowList<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), next_key: 0 }
    }
}

impl<T> RowList<T> {
    /// Append a row and return its key
    pub fn push(&mut self, value: T) -> RowKey {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(Row { key, value });
        key
    }

    /// Remove the row with `key`; false if it was already gone
    pub fn remove(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        self.rows.len() != before
    }

    pub fn get(&self, key: RowKey) -> Option<&T> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.value)
    }

    pub fn update(&mut self, key: RowKey, f: impl FnOnce(&mut T)) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            f(&mut row.value);
        }
    }

    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|row| row.key).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert every row, preserving order
    pub fn collect<U>(&self, convert: impl Fn(&T) -> U) -> Vec<U> {
        self.rows.iter().map(|row| convert(&row.value)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRow {
    pub date: String,
    pub kind: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionRow {
    pub action: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunityRow {
    pub project: String,
    pub estimated_value: String,
}

/// Which repeatable list a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubList {
    Events,
    Notes,
    Actions,
    Opportunities,
}

/// Numeric input: blank or unparseable becomes `None`
pub fn number_field(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Date input: normalized timestamp, or empty string when blank
pub fn date_field(raw: &str) -> String {
    to_iso_timestamp(raw)
}

/// Optional top-level text input: blank becomes `None`
fn optional_field(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub events: RowList<EventRow>,
    pub notes: RowList<String>,
    pub actions: RowList<ActionRow>,
    pub opportunities: RowList<OpportunityRow>,
}

impl ContactForm {
    /// Blank form for create mode
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing contact, one row per entry
    pub fn from_contact(contact: &Contact) -> Self {
        let mut form = Self {
            name: contact.name.clone(),
            email: contact.email.clone().unwrap_or_default(),
            company: contact.company.clone().unwrap_or_default(),
            position: contact.position.clone().unwrap_or_default(),
            ..Self::default()
        };

        for event in &contact.events {
            form.events.push(EventRow {
                date: date_input_value(&event.date),
                kind: event.kind.clone(),
                notes: event.notes.clone(),
            });
        }
        for note in &contact.important_notes {
            form.notes.push(note.clone());
        }
        for action in &contact.next_actions {
            form.actions.push(ActionRow {
                action: action.action.clone(),
                due_date: date_input_value(&action.due_date),
            });
        }
        for opportunity in &contact.opportunities {
            form.opportunities.push(OpportunityRow {
                project: opportunity.project.clone(),
                estimated_value: opportunity
                    .estimated_value
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            });
        }
        form
    }

    /// Append an empty row to one of the sub-lists
    pub fn add_row(&mut self, list: SubList) -> RowKey {
        match list {
            SubList::Events => self.events.push(EventRow::default()),
            SubList::Notes => self.notes.push(String::new()),
            SubList::Actions => self.actions.push(ActionRow::default()),
            SubList::Opportunities => self.opportunities.push(OpportunityRow::default()),
        }
    }

    pub fn remove_row(&mut self, list: SubList, key: RowKey) -> bool {
        match list {
            SubList::Events => self.events.remove(key),
            SubList::Notes => self.notes.remove(key),
            SubList::Actions => self.actions.remove(key),
            SubList::Opportunities => self.opportunities.remove(key),
        }
    }

    /// Request body for create/update.
    ///
    /// Numeric blanks become `null` while date and text blanks stay `""`.
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: optional_field(&self.email),
            company: optional_field(&self.company),
            position: optional_field(&self.position),
            events: self.events.collect(|row| Event {
                date: date_field(&row.date),
                kind: row.kind.clone(),
                notes: row.notes.clone(),
            }),
            important_notes: self.notes.collect(|note| note.clone()),
            next_actions: self.actions.collect(|row| Action {
                action: row.action.clone(),
                due_date: date_field(&row.due_date),
            }),
            opportunities: self.opportunities.collect(|row| Opportunity {
                project: row.project.clone(),
                estimated_value: number_field(&row.estimated_value),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact {
            contact_id: "c1".to_string(),
            name: "Jean Dupont".to_string(),
            email: Some("jean@example.com".to_string()),
            company: None,
            position: Some("CEO".to_string()),
            events: vec![Event {
                date: "2024-01-15T00:00:00.000Z".to_string(),
                kind: "call".to_string(),
                notes: "intro".to_string(),
            }],
            important_notes: vec!["VIP".to_string(), "prefers email".to_string()],
            next_actions: vec![Action {
                action: "send quote".to_string(),
                due_date: "2024-02-01T00:00:00Z".to_string(),
            }],
            opportunities: vec![Opportunity { project: "CRM".to_string(), estimated_value: Some(150.5) }],
            date_creation: None,
        }
    }

    #[test]
    fn test_empty_lists_yield_empty_payload_lists() {
        let payload = ContactForm::blank().to_payload();
        assert!(payload.events.is_empty());
        assert!(payload.important_notes.is_empty());
        assert!(payload.next_actions.is_empty());
        assert!(payload.opportunities.is_empty());
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let mut form = ContactForm::blank();
        form.name = "Solo".to_string();
        let payload = form.to_payload();
        assert_eq!(payload.name, "Solo");
        assert_eq!(payload.email, None);
        assert_eq!(payload.company, None);
        assert_eq!(payload.position, None);
    }

    #[test]
    fn test_number_field() {
        assert_eq!(number_field(""), None);
        assert_eq!(number_field("150.5"), Some(150.5));
        assert_eq!(number_field(" 42 "), Some(42.0));
        assert_eq!(number_field("abc"), None);
    }

    #[test]
    fn test_opportunity_value_blank_is_null() {
        let mut form = ContactForm::blank();
        let blank = form.add_row(SubList::Opportunities);
        let filled = form.add_row(SubList::Opportunities);
        form.opportunities.update(blank, |row| row.project = "A".to_string());
        form.opportunities.update(filled, |row| {
            row.project = "B".to_string();
            row.estimated_value = "150.5".to_string();
        });

        let payload = form.to_payload();
        assert_eq!(payload.opportunities[0].estimated_value, None);
        assert_eq!(payload.opportunities[1].estimated_value, Some(150.5));
    }

    #[test]
    fn test_date_blank_stays_empty_string() {
        let mut form = ContactForm::blank();
        let dated = form.add_row(SubList::Events);
        form.add_row(SubList::Events);
        form.events.update(dated, |row| row.date = "2024-01-15".to_string());

        let payload = form.to_payload();
        assert!(payload.events[0].date.starts_with("2024-01-15T"));
        assert_eq!(payload.events[1].date, "");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["events"][1]["date"], "");
    }

    #[test]
    fn test_from_contact_prefills_rows() {
        let form = ContactForm::from_contact(&sample_contact());
        assert_eq!(form.name, "Jean Dupont");
        assert_eq!(form.company, "");
        assert_eq!(form.events.len(), 1);
        assert_eq!(form.notes.len(), 2);
        assert_eq!(form.actions.len(), 1);
        assert_eq!(form.opportunities.len(), 1);

        let key = form.events.keys()[0];
        assert_eq!(form.events.get(key).unwrap().date, "2024-01-15");
        let key = form.actions.keys()[0];
        assert_eq!(form.actions.get(key).unwrap().due_date, "2024-02-01");
        let key = form.opportunities.keys()[0];
        assert_eq!(form.opportunities.get(key).unwrap().estimated_value, "150.5");
    }

    #[test]
    fn test_prefilled_form_round_trips_to_payload() {
        let payload = ContactForm::from_contact(&sample_contact()).to_payload();
        assert_eq!(payload.email.as_deref(), Some("jean@example.com"));
        assert_eq!(payload.company, None);
        assert_eq!(payload.events[0].date, "2024-01-15T00:00:00.000Z");
        assert_eq!(payload.important_notes, vec!["VIP".to_string(), "prefers email".to_string()]);
        assert_eq!(payload.next_actions[0].due_date, "2024-02-01T00:00:00.000Z");
        assert_eq!(payload.opportunities[0].estimated_value, Some(150.5));
    }

    #[test]
    fn test_remove_row_keeps_other_rows() {
        let mut form = ContactForm::blank();
        let first = form.add_row(SubList::Notes);
        let second = form.add_row(SubList::Notes);
        let third = form.add_row(SubList::Notes);
        form.notes.update(first, |n| *n = "one".to_string());
        form.notes.update(third, |n| *n = "three".to_string());

        assert!(form.remove_row(SubList::Notes, second));
        assert!(!form.remove_row(SubList::Notes, second));
        assert_eq!(form.to_payload().important_notes, vec!["one".to_string(), "three".to_string()]);

        // keys are not reused after removal
        let fourth = form.add_row(SubList::Notes);
        assert!(fourth > third);
    }
}
