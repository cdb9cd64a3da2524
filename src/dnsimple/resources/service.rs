use super::{decode_list, decode_one, ensure_found, ensure_success, segment};
use crate::client::Client;
use crate::error::Result;
use serde::Deserialize;

/// A one-click service (hosted mail, app platform, ...) that can be
/// applied to a domain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
}

impl Service {
    pub fn find(client: &Client, id: &str) -> Result<Service> {
        let path = format!("/services/{}", segment(id)?);
        let response = ensure_found(client.get(&path)?, "service", id)?;
        decode_one(&response, "service")
    }

    pub fn all(client: &Client) -> Result<Vec<Service>> {
        decode_list(&ensure_success(client.get("/services")?)?, "service")
    }
}
