use super::{ApiRequest, ApiResponse, Transport};
use crate::client::Client;
use crate::credentials::ApiCredentials;
use crate::error::Result;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// In-memory transport for testing and development.
/// Never touches the network.
///
/// Clones share state, so a test can hand one clone to a [`Client`] and keep
/// another to queue responses and inspect what was sent.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<ApiResponse>,
    requests: Vec<ApiRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response; responses are consumed in order.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state
            .borrow_mut()
            .responses
            .push_back(ApiResponse::new(status, body));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// A client with username/password credentials wired to this transport.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn client(&self) -> Client {
        let credentials = ApiCredentials::default()
            .with_username("user@example.com")
            .with_password("secret");
        self.client_with(credentials)
    }

    pub fn client_with(&self, credentials: ApiCredentials) -> Client {
        Client::new(credentials, self.clone())
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        Ok(state.responses.pop_front().unwrap_or_else(|| {
            ApiResponse::new(
                500,
                format!("no response queued for {} {}", request.method, request.path),
            )
        }))
    }
}
