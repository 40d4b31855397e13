//! Stateless request assembler.
//!
//! `RequestBuilder` turns high-level inputs (endpoint, query pairs,
//! credentials, per-call options) into a [`RequestDescriptor`] without
//! performing any I/O. Assembly never fails: absent optional inputs mean
//! "feature not requested".

use crate::request::{BasicAuth, Method, Query, RequestDescriptor, RequestOptions};

/// Assembles [`RequestDescriptor`] values against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Concatenate base URL and endpoint, then append the query string.
    ///
    /// Pairs are joined with literal `=` and `&` in insertion order; no
    /// percent-encoding is applied (see [`Query`]). An empty query leaves
    /// the URL untouched.
    pub fn build_endpoint(&self, endpoint: Option<&str>, query: Option<&Query>) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint.unwrap_or(""));

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let encoded: Vec<String> = query
                .pairs()
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            url = format!("{}?{}", url, encoded.join("&"));
        }

        url
    }

    /// Default headers for a request.
    ///
    /// `Accept: application/json` always; the Content-Type depends on
    /// whether a form-style body is being sent.
    pub fn build_headers(has_form_body: bool) -> Vec<(String, String)> {
        let content_type = if has_form_body {
            "application/x-www-form-urlencoded"
        } else {
            "application/json"
        };

        vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), content_type.to_string()),
        ]
    }

    /// Assemble a full descriptor.
    ///
    /// Credential precedence: a bearer token becomes an `Authorization`
    /// header and suppresses basic-auth entirely; otherwise a basic-auth
    /// pair is attached (unencoded, left to the transport) when both
    /// username and password are present. Caller headers in `options`
    /// replace computed defaults with the same name.
    #[allow(clippy::too_many_arguments)]
    pub fn build_request(
        &self,
        method: Method,
        endpoint: Option<&str>,
        query: Option<&Query>,
        bearer_token: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        options: RequestOptions,
    ) -> RequestDescriptor {
        let has_form_body = options.body.as_ref().is_some_and(|b| b.is_form());
        let mut headers = Self::build_headers(has_form_body);

        let mut basic_auth = None;
        if let Some(token) = bearer_token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        } else if let (Some(username), Some(password)) = (username, password) {
            basic_auth = Some(BasicAuth {
                username: username.to_string(),
                password: password.to_string(),
            });
        }

        for (key, value) in options.headers {
            if let Some(existing) = headers
                .iter_mut()
                .find(|(name, _)| name.eq_ignore_ascii_case(&key))
            {
                existing.1 = value;
            } else {
                headers.push((key, value));
            }
        }

        RequestDescriptor {
            method,
            url: self.build_endpoint(endpoint, query),
            headers,
            basic_auth,
            body: options.body,
            timeout: options.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Body;

    fn builder() -> RequestBuilder {
        RequestBuilder::new("https://example.com")
    }

    fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn endpoint_without_query_is_plain_concatenation() {
        assert_eq!(
            builder().build_endpoint(Some("/api/v1/test"), None),
            "https://example.com/api/v1/test"
        );
        assert_eq!(builder().build_endpoint(None, None), "https://example.com");
    }

    #[test]
    fn empty_query_leaves_url_unchanged() {
        let query = Query::new();
        assert_eq!(
            builder().build_endpoint(Some("/x"), Some(&query)),
            "https://example.com/x"
        );
    }

    #[test]
    fn query_pairs_join_in_insertion_order() {
        let query = Query::new().with("type", 1).with("order", "asc");
        assert_eq!(
            builder().build_endpoint(Some("/api/v1/test"), Some(&query)),
            "https://example.com/api/v1/test?type=1&order=asc"
        );
    }

    #[test]
    fn query_values_are_not_percent_encoded() {
        let query = Query::new().with("name", "a b&c");
        assert_eq!(
            builder().build_endpoint(None, Some(&query)),
            "https://example.com?name=a b&c"
        );
    }

    #[test]
    fn endpoint_with_embedded_query_is_untouched() {
        assert_eq!(
            builder().build_endpoint(Some("/api/v1/test?name=test&last=test"), None),
            "https://example.com/api/v1/test?name=test&last=test"
        );
    }

    #[test]
    fn default_headers_for_json_body() {
        let headers = RequestBuilder::build_headers(false);
        assert_eq!(header(&headers, "Accept"), Some("application/json"));
        assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
    }

    #[test]
    fn default_headers_for_form_body() {
        let headers = RequestBuilder::build_headers(true);
        assert_eq!(header(&headers, "Accept"), Some("application/json"));
        assert_eq!(
            header(&headers, "Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn bearer_token_sets_authorization_header() {
        let req = builder().build_request(
            Method::Get,
            Some("/api/v1/test"),
            Some(&Query::new().with("type", 1).with("order", "asc")),
            Some("abc"),
            None,
            None,
            RequestOptions::default(),
        );
        assert_eq!(req.url, "https://example.com/api/v1/test?type=1&order=asc");
        assert_eq!(header(&req.headers, "Authorization"), Some("Bearer abc"));
        assert!(req.basic_auth.is_none());
    }

    #[test]
    fn bearer_token_wins_over_basic_auth() {
        let req = builder().build_request(
            Method::Get,
            None,
            None,
            Some("abc"),
            Some("user"),
            Some("secret"),
            RequestOptions::default(),
        );
        assert_eq!(header(&req.headers, "Authorization"), Some("Bearer abc"));
        assert!(req.basic_auth.is_none());
    }

    #[test]
    fn username_and_password_attach_basic_auth_pair() {
        let req = builder().build_request(
            Method::Get,
            None,
            None,
            None,
            Some("user"),
            Some("secret"),
            RequestOptions::default(),
        );
        assert!(header(&req.headers, "Authorization").is_none());
        assert_eq!(
            req.basic_auth,
            Some(BasicAuth {
                username: "user".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn username_alone_attaches_nothing() {
        let req = builder().build_request(
            Method::Get,
            None,
            None,
            None,
            Some("user"),
            None,
            RequestOptions::default(),
        );
        assert!(header(&req.headers, "Authorization").is_none());
        assert!(req.basic_auth.is_none());
    }

    #[test]
    fn form_body_selects_urlencoded_content_type() {
        let req = builder().build_request(
            Method::Post,
            None,
            None,
            None,
            None,
            None,
            RequestOptions::form(vec![("user".to_string(), "test".to_string())]),
        );
        assert_eq!(
            header(&req.headers, "Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert!(matches!(req.body, Some(Body::Form(_))));
    }

    #[test]
    fn caller_headers_override_defaults() {
        let req = builder().build_request(
            Method::Post,
            None,
            None,
            None,
            None,
            None,
            RequestOptions::raw("<xml/>").header("content-type", "application/xml"),
        );
        assert_eq!(header(&req.headers, "Content-Type"), Some("application/xml"));
        assert_eq!(
            req.headers
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
                .count(),
            1
        );
    }
}
