//! # Request Builder
//!
//! [`Client`] is the context value every entity and command call receives. It
//! owns the resolved [`ApiCredentials`] and a [`Transport`], and turns
//! `(method, path, options)` into a complete [`ApiRequest`]:
//!
//! - `Accept: application/json` and a `User-Agent` are always set; a body is
//!   sent as JSON with `Content-Type: application/json`.
//! - Exactly one authentication mode is attached: HTTP Basic when a password
//!   is known, otherwise the `X-DNSimple-Token: <username>:<token>` header.
//!   With neither, the call fails with a configuration error and nothing is
//!   sent.
//! - A `401` response becomes [`DnsimpleError::AuthenticationFailed`]; every
//!   other status is returned untouched for the caller to interpret.

use crate::credentials::{ApiCredentials, Authentication};
use crate::error::{DnsimpleError, Result};
use crate::transport::http::HttpTransport;
use crate::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use serde_json::Value;

pub const TOKEN_HEADER: &str = "X-DNSimple-Token";
const USER_AGENT: &str = concat!("dnsimple-rust/", env!("CARGO_PKG_VERSION"));

/// Headers the client owns; caller-supplied values for these are dropped.
const RESERVED_HEADERS: &[&str] = &[
    "Accept",
    "Authorization",
    "Content-Type",
    "User-Agent",
    TOKEN_HEADER,
];

fn is_reserved_header(name: &str) -> bool {
    RESERVED_HEADERS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name.trim()))
}

/// Per-call additions to a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

pub struct Client {
    credentials: ApiCredentials,
    transport: Box<dyn Transport>,
}

impl Client {
    pub fn new<T: Transport + 'static>(credentials: ApiCredentials, transport: T) -> Self {
        Self {
            credentials,
            transport: Box::new(transport),
        }
    }

    /// A client that talks HTTPS, through the configured proxy if any.
    pub fn from_credentials(credentials: ApiCredentials) -> Result<Self> {
        let transport = HttpTransport::for_credentials(&credentials)?;
        Ok(Self::new(credentials, transport))
    }

    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiRequest> {
        let authentication = self.credentials.authentication()?;

        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if options.body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let basic_auth = match authentication {
            Authentication::Basic { username, password } => Some((username, password)),
            Authentication::Token { username, token } => {
                headers.push((TOKEN_HEADER.to_string(), format!("{}:{}", username, token)));
                None
            }
        };
        // Caller headers never replace or duplicate the defaults or the auth mode.
        headers.extend(
            options
                .headers
                .into_iter()
                .filter(|(name, _)| !is_reserved_header(name)),
        );

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Ok(ApiRequest {
            method,
            url: format!("{}{}", self.credentials.base_url(), path),
            path,
            query: options.query,
            headers,
            basic_auth,
            body: options.body,
        })
    }

    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let request = self.build_request(method, path, options)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.send(&request)?;
        tracing::debug!(status = response.status, "received response");

        if response.status == 401 {
            return Err(DnsimpleError::AuthenticationFailed);
        }
        Ok(response)
    }

    pub fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(HttpMethod::Get, path, RequestOptions::new())
    }

    pub fn post(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.request(HttpMethod::Post, path, RequestOptions::new().with_body(body))
    }

    pub fn put(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.request(HttpMethod::Put, path, RequestOptions::new().with_body(body))
    }

    pub fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(HttpMethod::Delete, path, RequestOptions::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MockTransport;
    use serde_json::json;

    fn token_credentials() -> ApiCredentials {
        ApiCredentials::default()
            .with_username("alice@example.com")
            .with_api_token("t0k3n")
    }

    #[test]
    fn password_selects_basic_auth_only() {
        let mock = MockTransport::new();
        mock.respond(200, "[]");
        mock.client().get("/domains").unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(
            sent.basic_auth,
            Some(("user@example.com".to_string(), "secret".to_string()))
        );
        assert_eq!(sent.header(TOKEN_HEADER), None);
    }

    #[test]
    fn token_selects_token_header_only() {
        let mock = MockTransport::new();
        mock.respond(200, "[]");
        mock.client_with(token_credentials()).get("/domains").unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.header(TOKEN_HEADER), Some("alice@example.com:t0k3n"));
        assert_eq!(sent.basic_auth, None);
    }

    #[test]
    fn missing_auth_fails_before_sending() {
        let mock = MockTransport::new();
        let client = mock.client_with(ApiCredentials::default().with_username("alice"));

        let err = client.get("/domains").unwrap_err();
        assert!(matches!(err, DnsimpleError::Configuration(_)));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn merges_standard_headers_and_options() {
        let client = MockTransport::new().client_with(token_credentials().with_host("sandbox.dnsimple.com"));
        let request = client
            .build_request(
                HttpMethod::Post,
                "domains",
                RequestOptions::new()
                    .with_body(json!({"domain": {"name": "example.com"}}))
                    .with_query("page", "2")
                    .with_header("X-Request-Id", "abc"),
            )
            .unwrap();

        assert_eq!(request.url, "https://sandbox.dnsimple.com/domains");
        assert_eq!(request.path, "/domains");
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("X-Request-Id"), Some("abc"));
        assert!(request.header("User-Agent").unwrap().starts_with("dnsimple-rust/"));
        assert_eq!(request.query, vec![("page".to_string(), "2".to_string())]);
    }

    #[test]
    fn caller_headers_cannot_override_defaults_or_auth() {
        let client = MockTransport::new().client();
        let request = client
            .build_request(
                HttpMethod::Get,
                "/domains",
                RequestOptions::new()
                    .with_header("accept", "text/html")
                    .with_header("x-dnsimple-token", "mallory:stolen")
                    .with_header("Authorization", "Bearer other")
                    .with_header("X-Request-Id", "abc"),
            )
            .unwrap();

        let accepts: Vec<_> = request
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("accept"))
            .collect();
        assert_eq!(accepts.len(), 1);
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header(TOKEN_HEADER), None);
        assert_eq!(request.header("Authorization"), None);
        assert!(request.basic_auth.is_some());
        assert_eq!(request.header("X-Request-Id"), Some("abc"));
    }

    #[test]
    fn unauthorized_is_authentication_failure_for_any_method() {
        let mock = MockTransport::new();
        let client = mock.client();
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ] {
            mock.respond(401, "{\"error\":\"nope\"}");
            let err = client
                .request(method, "/anything/at/all", RequestOptions::new())
                .unwrap_err();
            assert!(matches!(err, DnsimpleError::AuthenticationFailed));
        }
    }

    #[test]
    fn other_statuses_are_returned_as_is() {
        let mock = MockTransport::new();
        mock.respond(422, "{\"errors\":{}}");
        let response = mock.client().post("/domains", json!({})).unwrap();
        assert_eq!(response.status, 422);
        assert_eq!(response.body, "{\"errors\":{}}");
    }
}
