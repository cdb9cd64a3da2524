//! # Transport Layer
//!
//! The [`Transport`] trait is the seam between request construction and the
//! network. The [`Client`](crate::client::Client) builds a fully resolved
//! [`ApiRequest`] (URL, headers, authentication, body) and hands it to a
//! transport, which only has to move it over the wire and report back the
//! status and raw body.
//!
//! ## Implementations
//!
//! - [`http::HttpTransport`]: blocking HTTPS via `reqwest`, optionally routed
//!   through a proxy.
//! - [`memory::MockTransport`]: records every request and replays queued
//!   responses. No network; used throughout the test suites.
//!
//! Status interpretation (401, 404, ...) lives above this layer. A transport
//! never fails because of an HTTP status.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

pub mod http;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A request with every default already merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the API host, e.g. `/domains/example.com`.
    pub path: String,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub basic_auth: Option<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Moves a built request over the wire.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
