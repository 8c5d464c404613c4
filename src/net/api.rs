//! REST client for the vault server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! the configured timeout. Server-side and host tests: stubs returning
//! `ApiError::Network`, since these endpoints only make sense in the browser.
//!
//! Every request carries `X-Requested-With: XMLHttpRequest` so the server
//! answers 401 JSON instead of a login redirect.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::error::ApiError;
use super::types::{Entry, LoginRequest, SetupRequest};
use crate::config::ClientConfig;

pub const AJAX_HEADER: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available outside the browser";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Thin handle over the API base URL and request timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone(), timeout: config.request_timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `POST /api/login`.
    pub async fn login(&self, body: &LoginRequest) -> Result<(), ApiError> {
        self.send_unit(HttpMethod::Post, "/api/login", Some(body)).await
    }

    /// `POST /api/setup`.
    pub async fn setup(&self, body: &SetupRequest) -> Result<(), ApiError> {
        self.send_unit(HttpMethod::Post, "/api/setup", Some(body)).await
    }

    /// `POST /api/logout`. Best effort; the outcome is not reported.
    pub async fn logout(&self) {
        if let Err(e) = self.send_unit::<()>(HttpMethod::Post, "/api/logout", None).await {
            #[cfg(feature = "hydrate")]
            log::debug!("logout request failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
    }

    /// `GET /api/entries`.
    ///
    /// Any non-401 response whose body parses yields its `entries` (possibly
    /// empty), mirroring how the dashboard treats the list as a snapshot.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send::<()>(HttpMethod::Get, ENTRIES_ENDPOINT, None).await?;
            if resp.status() == 401 {
                return Err(ApiError::from_status(401, error_message(&resp).await));
            }
            let body: super::types::EntryList = decode(resp).await?;
            Ok(body.entries)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }

    /// `GET /api/entries/{id}`.
    pub async fn fetch_entry(&self, id: &str) -> Result<Entry, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send::<()>(HttpMethod::Get, &entry_endpoint(id), None).await?;
            let resp = ensure_ok(resp).await?;
            let body: super::types::EntryEnvelope = decode(resp).await?;
            Ok(body.entry)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }

    /// `POST /api/entries` for a new entry, `PUT /api/entries/{id}` otherwise.
    ///
    /// Returns the server's copy when it sends one back.
    pub async fn save_entry(&self, request: &SaveRequest) -> Result<Option<Entry>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (method, path) = request.route();
            let resp = self.send(method, &path, Some(request.entry())).await?;
            let resp = ensure_ok(resp).await?;
            let body: super::types::SavedEntry = decode(resp).await?;
            Ok(body.entry)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }

    /// `DELETE /api/entries/{id}`.
    pub async fn delete_entry(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit::<()>(HttpMethod::Delete, &entry_endpoint(id), None).await
    }

    async fn send_unit<B: serde::Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(method, path, body).await?;
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send<B: serde::Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };
        let builder = RequestBuilder::new(&self.url(path))
            .method(method)
            .header(AJAX_HEADER, AJAX_HEADER_VALUE);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        with_timeout(self.timeout, async {
            request.send().await.map_err(|e| ApiError::Network(e.to_string()))
        })
        .await
    }
}

/// A pending create or update, built by the dashboard before any I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRequest {
    Create(Entry),
    Update { id: String, entry: Entry },
}

impl SaveRequest {
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    pub fn entry(&self) -> &Entry {
        match self {
            Self::Create(entry) | Self::Update { entry, .. } => entry,
        }
    }

    /// HTTP method and path this save goes to.
    pub fn route(&self) -> (HttpMethod, String) {
        match self {
            Self::Create(_) => (HttpMethod::Post, ENTRIES_ENDPOINT.to_owned()),
            Self::Update { id, .. } => (HttpMethod::Put, entry_endpoint(id)),
        }
    }
}

const ENTRIES_ENDPOINT: &str = "/api/entries";

fn entry_endpoint(id: &str) -> String {
    format!("{ENTRIES_ENDPOINT}/{id}")
}

/// Map a non-2xx response to an `ApiError`, reading the `error` field.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    Err(ApiError::from_status(status, error_message(&resp).await))
}

#[cfg(feature = "hydrate")]
async fn error_message(resp: &gloo_net::http::Response) -> Option<String> {
    let text = resp.text().await.ok()?;
    parse_error_message(&text)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the `error` field from a JSON error body, if any.
#[cfg(any(test, feature = "hydrate"))]
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T, F>(timeout: Duration, fut: F) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let sleep = std::pin::pin!(gloo_timers::future::sleep(timeout));
    match select(fut, sleep).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}
