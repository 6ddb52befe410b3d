//! Contacts API Client
//!
//! Typed bindings to the REST endpoints. The HTTP round-trip itself sits
//! behind the [`Transport`] trait so the client can run against `fetch` in the
//! browser or a recording transport in tests.

mod fetch;
pub mod routes;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Contact, ContactPayload, Stats};

pub use fetch::FetchTransport;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    Network(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The response body was not the expected JSON
    Decode(String),
    /// The request body could not be serialized
    Encode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected status: {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Encode(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single HTTP request; `body` is JSON text when present
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, body: None }
    }

    pub fn delete(url: String) -> Self {
        Self { method: Method::Delete, url, body: None }
    }

    pub fn with_json<B: Serialize>(method: Method, url: String, body: &B) -> ApiResult<Self> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, url, body: Some(body) })
    }
}

/// HTTP round-trip abstraction
///
/// Implementations return the response body text for 2xx responses and an
/// [`ApiError`] for everything else. Futures are not `Send`: they run on the
/// browser event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<String>;
}

/// Contacts API bound to a base URL
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self { transport, base: base.into() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/contacts[?search=term]`
    pub async fn list_contacts(&self, search: Option<&str>) -> ApiResult<Vec<Contact>> {
        let body = self.transport.send(ApiRequest::get(routes::contacts(&self.base, search))).await?;
        decode(&body)
    }

    /// `GET /api/contacts/{id}`
    pub async fn get_contact(&self, id: &str) -> ApiResult<Contact> {
        let body = self.transport.send(ApiRequest::get(routes::contact(&self.base, id))).await?;
        decode(&body)
    }

    /// `POST /api/contacts`
    pub async fn create_contact(&self, payload: &ContactPayload) -> ApiResult<Contact> {
        let request = ApiRequest::with_json(Method::Post, routes::contacts(&self.base, None), payload)?;
        let body = self.transport.send(request).await?;
        decode(&body)
    }

    /// `PUT /api/contacts/{id}`
    pub async fn update_contact(&self, id: &str, payload: &ContactPayload) -> ApiResult<Contact> {
        let request = ApiRequest::with_json(Method::Put, routes::contact(&self.base, id), payload)?;
        let body = self.transport.send(request).await?;
        decode(&body)
    }

    /// `DELETE /api/contacts/{id}`; the response body is ignored
    pub async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        self.transport.send(ApiRequest::delete(routes::contact(&self.base, id))).await?;
        Ok(())
    }

    /// `GET /api/stats`
    pub async fn stats(&self) -> ApiResult<Stats> {
        let body = self.transport.send(ApiRequest::get(routes::stats(&self.base))).await?;
        decode(&body)
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CannedTransport {
        response: ApiResult<String>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    #[async_trait(?Send)]
    impl Transport for CannedTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<String> {
            self.seen.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn client(response: ApiResult<String>) -> ApiClient<CannedTransport> {
        ApiClient::new(CannedTransport { response, seen: RefCell::new(Vec::new()) }, "")
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let api = client(Ok("<html>oops</html>".to_string()));
        let result = api.list_contacts(None).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_status_error_propagates() {
        let api = client(Err(ApiError::Status(404)));
        assert_eq!(api.get_contact("missing").await, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let api = client(Ok(r#"{"message": "ok"}"#.to_string()));
        assert_eq!(api.delete_contact("c1").await, Ok(()));
        let seen = api.transport().seen.borrow();
        assert_eq!(seen[0].method, Method::Delete);
        assert_eq!(seen[0].url, "/api/contacts/c1");
        assert_eq!(seen[0].body, None);
    }

    #[tokio::test]
    async fn test_update_sends_json_body() {
        let api = client(Ok(r#"{"contactId": "c1", "name": "Jean"}"#.to_string()));
        let payload = ContactPayload {
            name: "Jean".to_string(),
            email: None,
            company: None,
            position: None,
            events: vec![],
            important_notes: vec![],
            next_actions: vec![],
            opportunities: vec![],
        };

        let updated = api.update_contact("c1", &payload).await.unwrap();
        assert_eq!(updated.name, "Jean");

        let seen = api.transport().seen.borrow();
        assert_eq!(seen[0].method, Method::Put);
        assert_eq!(seen[0].url, "/api/contacts/c1");
        let body: serde_json::Value = serde_json::from_str(seen[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Jean");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Status(500).to_string(), "Unexpected status: 500");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }
}
