use super::{decode_one, ensure_success};
use crate::client::Client;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub domain_count: Option<u64>,
    pub domain_limit: Option<u64>,
    pub login_count: Option<u64>,
    pub failed_login_count: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// The account the credentials belong to.
    pub fn me(client: &Client) -> Result<User> {
        decode_one(&ensure_success(client.get("/users/me")?)?, "user")
    }
}
