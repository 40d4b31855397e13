//! Request client: verb methods, dispatch, response normalization.
//!
//! # Design
//! `RequestClient` binds a base URL and optional default basic-auth
//! credentials at construction, then stays immutable. Each call assembles
//! a fresh [`RequestDescriptor`](crate::request::RequestDescriptor), hands
//! it to the injected transport, and normalizes the outcome into
//! `Result<Payload, Error>`. Concurrent calls on one client are safe:
//! nothing mutable is shared between calls.

use tracing::{debug, error};

use crate::builder::RequestBuilder;
use crate::error::Error;
use crate::request::{Method, Query, RequestOptions};
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Normalized response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// 204 No Content.
    Empty,
    /// Body decoded as JSON.
    Json(serde_json::Value),
    /// Success status, but the body was not valid JSON.
    Text(String),
}

impl Payload {
    pub fn json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Synchronous HTTP convenience client.
///
/// Generic over the transport so tests and embedders can substitute their
/// own [`HttpTransport`]; defaults to [`ReqwestTransport`].
pub struct RequestClient<C: HttpTransport = ReqwestTransport> {
    builder: RequestBuilder,
    transport: C,
    username: Option<String>,
    password: Option<String>,
}

impl RequestClient<ReqwestTransport> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(ReqwestTransport::new(), base_url)
    }
}

impl<C: HttpTransport> RequestClient<C> {
    pub fn with_transport(transport: C, base_url: impl Into<String>) -> Self {
        Self {
            builder: RequestBuilder::new(base_url),
            transport,
            username: None,
            password: None,
        }
    }

    /// Set default basic-auth credentials, applied to every call that does
    /// not supply a bearer token.
    pub fn basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn get(
        &self,
        endpoint: Option<&str>,
        query: Option<&Query>,
        bearer_token: Option<&str>,
        options: RequestOptions,
    ) -> Result<Payload, Error> {
        self.request(Method::Get, endpoint, query, bearer_token, options)
    }

    pub fn post(
        &self,
        endpoint: Option<&str>,
        query: Option<&Query>,
        bearer_token: Option<&str>,
        options: RequestOptions,
    ) -> Result<Payload, Error> {
        self.request(Method::Post, endpoint, query, bearer_token, options)
    }

    pub fn put(
        &self,
        endpoint: Option<&str>,
        query: Option<&Query>,
        bearer_token: Option<&str>,
        options: RequestOptions,
    ) -> Result<Payload, Error> {
        self.request(Method::Put, endpoint, query, bearer_token, options)
    }

    pub fn delete(
        &self,
        endpoint: Option<&str>,
        query: Option<&Query>,
        bearer_token: Option<&str>,
        options: RequestOptions,
    ) -> Result<Payload, Error> {
        self.request(Method::Delete, endpoint, query, bearer_token, options)
    }

    /// Assemble, dispatch, normalize. Shared by all verb methods.
    pub fn request(
        &self,
        method: Method,
        endpoint: Option<&str>,
        query: Option<&Query>,
        bearer_token: Option<&str>,
        options: RequestOptions,
    ) -> Result<Payload, Error> {
        let descriptor = self.builder.build_request(
            method,
            endpoint,
            query,
            bearer_token,
            self.username.as_deref(),
            self.password.as_deref(),
            options,
        );

        debug!(method = %descriptor.method, url = %descriptor.url, "dispatching request");

        let response = self.transport.execute(&descriptor).map_err(|e| {
            error!("Error in request: {}", e);
            e
        })?;

        parse_response(response)
    }
}

/// Normalize a raw transport response.
///
/// 204 yields [`Payload::Empty`]; any 4xx/5xx yields [`Error::Status`]
/// displaying `"{status} {reason}: {body}"`; other statuses decode the
/// body as JSON, falling back to [`Payload::Text`] when it is not valid
/// JSON.
fn parse_response(response: HttpResponse) -> Result<Payload, Error> {
    if response.status == 204 {
        return Ok(Payload::Empty);
    }

    if response.status >= 400 {
        return Err(Error::Status {
            status: response.status,
            reason: response.reason,
            body: response.body,
        });
    }

    match serde_json::from_str(&response.body) {
        Ok(value) => Ok(Payload::Json(value)),
        Err(_) => Ok(Payload::Text(response.body)),
    }
}
