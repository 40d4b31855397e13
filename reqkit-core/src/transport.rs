//! The HTTP transport seam.

use crate::error::Error;
use crate::request::{Body, Method, RequestDescriptor};

/// Raw output of a completed HTTP round-trip.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A generic interface to execute an HTTP request.
///
/// The client is generic over this trait so applications can substitute
/// their own transport (a mock in tests, a differently-configured client
/// in production) without touching the assembly or normalization logic.
/// Connection pooling, TLS, and socket timeouts live behind this seam.
pub trait HttpTransport {
    fn execute(&self, request: &RequestDescriptor) -> Result<HttpResponse, Error>;
}

/// Default transport using the `reqwest` blocking client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Wrap a caller-configured client (pool sizes, default timeouts, TLS).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: &RequestDescriptor) -> Result<HttpResponse, Error> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        for (k, v) in &request.headers {
            builder = builder.header(k.as_str(), v.as_str());
        }

        if let Some(auth) = &request.basic_auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        match &request.body {
            Some(Body::Json(value)) => builder = builder.body(value.to_string()),
            Some(Body::Form(fields)) => {
                builder = builder.body(serde_urlencoded::to_string(fields)?);
            }
            Some(Body::Raw(text)) => builder = builder.body(text.clone()),
            None => {}
        }

        let response = builder.send()?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text()?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
