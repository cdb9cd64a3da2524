use super::{decode_list, decode_one, ensure_found, ensure_success, segment, Attributes};
use crate::client::Client;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

/// A registrant/administrative contact.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization_name: Option<String>,
    pub job_title: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match self.organization_name.as_deref() {
            Some(org) if !org.is_empty() && !name.is_empty() => format!("{} ({})", name, org),
            Some(org) if !org.is_empty() => org.to_string(),
            _ => name,
        }
    }

    pub fn find(client: &Client, id: &str) -> Result<Contact> {
        let path = format!("/contacts/{}", segment(id)?);
        let response = ensure_found(client.get(&path)?, "contact", id)?;
        decode_one(&response, "contact")
    }

    pub fn all(client: &Client) -> Result<Vec<Contact>> {
        decode_list(&ensure_success(client.get("/contacts")?)?, "contact")
    }

    pub fn create(client: &Client, attributes: &Attributes) -> Result<Contact> {
        let response = client.post("/contacts", json!({ "contact": attributes }))?;
        decode_one(&ensure_success(response)?, "contact")
    }

    pub fn update(client: &Client, id: &str, attributes: &Attributes) -> Result<Contact> {
        let path = format!("/contacts/{}", segment(id)?);
        let response = client.put(&path, json!({ "contact": attributes }))?;
        decode_one(&ensure_found(response, "contact", id)?, "contact")
    }

    pub fn delete(client: &Client, id: &str) -> Result<()> {
        ensure_found(client.delete(&format!("/contacts/{}", segment(id)?))?, "contact", id)?;
        Ok(())
    }
}
