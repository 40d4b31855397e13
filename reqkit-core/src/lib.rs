//! reqkit-core — a thin convenience layer over a blocking HTTP transport.
//!
//! Assembles request parameters (URL, query string, headers, credentials)
//! from high-level inputs, dispatches a single call through a pluggable
//! [`HttpTransport`], and normalizes the response into a [`Payload`] or an
//! [`Error`]. No retries, no streaming, no token refresh; one call in, one
//! normalized result out.

pub mod builder;
pub mod client;
pub mod error;
pub mod request;
pub mod transport;

pub use builder::RequestBuilder;
pub use client::{Payload, RequestClient};
pub use error::Error;
pub use request::{BasicAuth, Body, Method, Query, RequestDescriptor, RequestOptions};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
