//! Frontend Models
//!
//! Data structures matching the contacts API. English camelCase names are
//! canonical; the localized names are accepted as aliases when reading.

use serde::{Deserialize, Serialize};

/// Contact record (matches backend response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub contact_id: String,
    #[serde(alias = "nom")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "entreprise")]
    pub company: Option<String>,
    #[serde(default, alias = "poste")]
    pub position: Option<String>,
    #[serde(default, alias = "evenements")]
    pub events: Vec<Event>,
    #[serde(default, alias = "notesImportantes")]
    pub important_notes: Vec<String>,
    #[serde(default, alias = "prochainesActions")]
    pub next_actions: Vec<Action>,
    #[serde(default, alias = "opportunites")]
    pub opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub date_creation: Option<String>,
}

/// Timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action: String,
    #[serde(alias = "dateEcheance")]
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(alias = "projet")]
    pub project: String,
    #[serde(default, alias = "valeurEstimee")]
    pub estimated_value: Option<f64>,
}

/// Aggregate counters computed by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_contacts: u64,
    #[serde(alias = "totalOpportunites")]
    pub total_opportunities: u64,
    #[serde(alias = "valeurTotaleOpportunites")]
    pub total_opportunities_value: f64,
}

/// Request body for create and update (no id, no creation date)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub events: Vec<Event>,
    pub important_notes: Vec<String>,
    pub next_actions: Vec<Action>,
    pub opportunities: Vec<Opportunity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_deserializes_canonical_names() {
        let json = r#"{
            "contactId": "c1",
            "name": "Jean Dupont",
            "email": "jean@example.com",
            "company": "ACME",
            "position": null,
            "events": [{"date": "2024-01-15T00:00:00Z", "type": "call", "notes": "intro"}],
            "importantNotes": ["likes coffee"],
            "nextActions": [{"action": "send quote", "dueDate": "2024-02-01T00:00:00Z"}],
            "opportunities": [{"project": "CRM", "estimatedValue": 1500.5}],
            "dateCreation": "2024-01-01T10:00:00"
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.contact_id, "c1");
        assert_eq!(contact.company.as_deref(), Some("ACME"));
        assert_eq!(contact.position, None);
        assert_eq!(contact.events[0].kind, "call");
        assert_eq!(contact.next_actions[0].due_date, "2024-02-01T00:00:00Z");
        assert_eq!(contact.opportunities[0].estimated_value, Some(1500.5));
    }

    #[test]
    fn test_contact_accepts_localized_aliases() {
        let json = r#"{
            "contactId": "c2",
            "nom": "Marie Martin",
            "entreprise": "Globex",
            "poste": "CTO",
            "evenements": [],
            "notesImportantes": ["VIP"],
            "prochainesActions": [{"action": "rappeler", "dateEcheance": "2024-03-01"}],
            "opportunites": [{"projet": "ERP", "valeurEstimee": null}]
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name, "Marie Martin");
        assert_eq!(contact.position.as_deref(), Some("CTO"));
        assert_eq!(contact.important_notes, vec!["VIP".to_string()]);
        assert_eq!(contact.next_actions[0].due_date, "2024-03-01");
        assert_eq!(contact.opportunities[0].project, "ERP");
        assert_eq!(contact.opportunities[0].estimated_value, None);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let contact: Contact = serde_json::from_str(r#"{"contactId": "c3", "name": "Solo"}"#).unwrap();
        assert!(contact.events.is_empty());
        assert!(contact.important_notes.is_empty());
        assert!(contact.next_actions.is_empty());
        assert!(contact.opportunities.is_empty());
        assert_eq!(contact.date_creation, None);
    }

    #[test]
    fn test_stats_accepts_both_namings() {
        let english: Stats = serde_json::from_str(
            r#"{"totalContacts": 3, "totalOpportunities": 2, "totalOpportunitiesValue": 99.5}"#,
        ).unwrap();
        let localized: Stats = serde_json::from_str(
            r#"{"totalContacts": 3, "totalOpportunites": 2, "valeurTotaleOpportunites": 99.5}"#,
        ).unwrap();
        assert_eq!(english, localized);
    }

    #[test]
    fn test_payload_serializes_canonical_names() {
        let payload = ContactPayload {
            name: "Jean".to_string(),
            email: None,
            company: Some("ACME".to_string()),
            position: None,
            events: vec![Event { date: String::new(), kind: "call".to_string(), notes: "n".to_string() }],
            important_notes: vec!["note".to_string()],
            next_actions: vec![Action { action: "a".to_string(), due_date: String::new() }],
            opportunities: vec![Opportunity { project: "p".to_string(), estimated_value: None }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["email"], serde_json::Value::Null);
        assert_eq!(value["events"][0]["type"], "call");
        assert_eq!(value["events"][0]["date"], "");
        assert_eq!(value["importantNotes"][0], "note");
        assert_eq!(value["nextActions"][0]["dueDate"], "");
        assert_eq!(value["opportunities"][0]["estimatedValue"], serde_json::Value::Null);
        assert!(value.get("contactId").is_none());
    }
}
