//! Endpoint URLs
//!
//! Path and query segments are encoded with `encodeURIComponent` rules.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// Contact collection; an empty search term means no filter
pub fn contacts(base: &str, search: Option<&str>) -> String {
    match search.filter(|term| !term.is_empty()) {
        Some(term) => format!("{}/api/contacts?search={}", base, encode_component(term)),
        None => format!("{}/api/contacts", base),
    }
}

pub fn contact(base: &str, id: &str) -> String {
    format!("{}/api/contacts/{}", base, encode_component(id))
}

pub fn stats(base: &str) -> String {
    format!("{}/api/stats", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_without_search() {
        assert_eq!(contacts("", None), "/api/contacts");
        assert_eq!(contacts("", Some("")), "/api/contacts");
    }

    #[test]
    fn test_contacts_with_search() {
        assert_eq!(contacts("", Some("Dup")), "/api/contacts?search=Dup");
        assert_eq!(
            contacts("http://localhost:8000", Some("Jean Dupont & co")),
            "http://localhost:8000/api/contacts?search=Jean%20Dupont%20%26%20co"
        );
    }

    #[test]
    fn test_encode_component_matches_browser() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("é/?#"), "%C3%A9%2F%3F%23");
    }

    #[test]
    fn test_contact_and_stats() {
        assert_eq!(
            contact("", "550e8400-e29b-41d4-a716-446655440000"),
            "/api/contacts/550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(stats("https://crm.example"), "https://crm.example/api/stats");
    }
}
