//! Card View Model
//!
//! Pure projection of (contacts, expanded set) into what the grid shows.
//! Components only turn these values into markup.

use std::collections::HashSet;

use crate::models::{Action, Contact, Event, Opportunity};

/// Entries shown per section on a collapsed card
pub const COLLAPSED_LIMIT: usize = 2;

/// A visible slice of one sub-list
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub entries: Vec<T>,
    /// Entries left out because the card is collapsed
    pub hidden: usize,
}

/// None when the list is empty (section not rendered at all)
pub fn section<T: Clone>(entries: &[T], expanded: bool) -> Option<Section<T>> {
    if entries.is_empty() {
        return None;
    }
    if expanded || entries.len() <= COLLAPSED_LIMIT {
        return Some(Section { entries: entries.to_vec(), hidden: 0 });
    }
    Some(Section {
        entries: entries[..COLLAPSED_LIMIT].to_vec(),
        hidden: entries.len() - COLLAPSED_LIMIT,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub expanded: bool,
    pub events: Option<Section<Event>>,
    pub notes: Option<Section<String>>,
    pub actions: Option<Section<Action>>,
    pub opportunities: Option<Section<Opportunity>>,
}

impl CardView {
    pub fn new(contact: &Contact, expanded: bool) -> Self {
        Self {
            id: contact.contact_id.clone(),
            name: contact.name.clone(),
            position: contact.position.clone().filter(|p| !p.is_empty()),
            email: contact.email.clone().filter(|e| !e.is_empty()),
            company: contact.company.clone().filter(|c| !c.is_empty()),
            expanded,
            events: section(&contact.events, expanded),
            notes: section(&contact.important_notes, expanded),
            actions: section(&contact.next_actions, expanded),
            opportunities: section(&contact.opportunities, expanded),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// No contacts: placeholder instead of an empty grid
    Empty,
    Cards(Vec<CardView>),
}

pub fn render_grid(contacts: &[Contact], expanded: &HashSet<String>) -> GridView {
    if contacts.is_empty() {
        return GridView::Empty;
    }
    GridView::Cards(
        contacts
            .iter()
            .map(|contact| CardView::new(contact, expanded.contains(&contact.contact_id)))
            .collect(),
    )
}

/// Opportunities only get a value badge when the amount is set and non-zero
pub fn opportunity_badge_value(opportunity: &Opportunity) -> Option<f64> {
    opportunity.estimated_value.filter(|v| *v != 0.0)
}
