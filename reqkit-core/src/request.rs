//! Plain-data request types.

use std::time::Duration;

/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(()),
        }
    }
}

/// Ordered query-string pairs.
///
/// Pairs are appended to the URL in insertion order, joined with literal
/// `=` and `&`. No percent-encoding is applied to keys or values; callers
/// that need encoding must pre-encode before pushing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a pair. Values accept anything printable (strings, numbers).
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Request body, one of the three body-carrying option styles.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// JSON payload, serialized as-is and sent with `application/json`.
    Json(serde_json::Value),
    /// Form fields, urlencoded at dispatch time and sent with
    /// `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
    /// Raw text body, sent unmodified.
    Raw(String),
}

impl Body {
    /// A form-style body selects the urlencoded Content-Type default.
    pub fn is_form(&self) -> bool {
        matches!(self, Body::Form(_))
    }
}

/// Basic-auth credential pair, encoded by the transport at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Per-call extras: body, header overrides, transport pass-throughs.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub body: Option<Body>,
    /// Caller-supplied headers; replace computed defaults of the same name.
    pub headers: Vec<(String, String)>,
    /// Request-level timeout, forwarded verbatim to the transport.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            body: Some(Body::Json(value)),
            ..Self::default()
        }
    }

    pub fn form(fields: Vec<(String, String)>) -> Self {
        Self {
            body: Some(Body::Form(fields)),
            ..Self::default()
        }
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            body: Some(Body::Raw(body.into())),
            ..Self::default()
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully-specified request, ready for dispatch.
///
/// Built fresh per call by [`RequestBuilder`](crate::builder::RequestBuilder)
/// and consumed by an [`HttpTransport`](crate::transport::HttpTransport).
/// Holds at most one credential: a bearer `Authorization` header or a
/// basic-auth pair, never both.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub basic_auth: Option<BasicAuth>,
    pub body: Option<Body>,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display_round_trip() {
        for (method, text) in [
            (Method::Get, "GET"),
            (Method::Post, "POST"),
            (Method::Put, "PUT"),
            (Method::Delete, "DELETE"),
        ] {
            assert_eq!(method.to_string(), text);
            assert_eq!(text.parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn method_from_str_is_case_insensitive() {
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
        assert!("PATCH".parse::<Method>().is_err());
    }

    #[test]
    fn query_preserves_insertion_order() {
        let query = Query::new().with("b", 2).with("a", "first");
        let pairs = query.pairs();
        assert_eq!(pairs[0], ("b".to_string(), "2".to_string()));
        assert_eq!(pairs[1], ("a".to_string(), "first".to_string()));
    }

    #[test]
    fn body_form_detection() {
        assert!(Body::Form(vec![]).is_form());
        assert!(!Body::Json(serde_json::json!({})).is_form());
        assert!(!Body::Raw("x".to_string()).is_form());
    }
}
