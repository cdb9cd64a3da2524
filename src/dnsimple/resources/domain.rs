use super::{decode_list, decode_one, ensure_found, ensure_success, segment, Attributes, Service};
use crate::client::Client;
use crate::error::{DnsimpleError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub user_id: Option<u64>,
    pub registrant_id: Option<u64>,
    pub state: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub auto_renew: Option<bool>,
    pub lockable: Option<bool>,
    pub whois_protected: Option<bool>,
    pub name_server_status: Option<String>,
    pub unicode_name: Option<String>,
    pub record_count: Option<u64>,
    pub service_count: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of a registration availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Registered,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Registered => "registered",
        }
    }
}

pub(crate) fn with_extended_attributes(mut body: Value, extended: &Attributes) -> Value {
    if !extended.is_empty() {
        body["extended_attribute"] = json!(extended);
    }
    body
}

impl Domain {
    /// Look a domain up by name or numeric id.
    pub fn find(client: &Client, name: &str) -> Result<Domain> {
        let response = client.get(&format!("/domains/{}", segment(name)?))?;
        let response = ensure_found(response, "domain", name)?;
        decode_one(&response, "domain")
    }

    pub fn all(client: &Client) -> Result<Vec<Domain>> {
        let response = ensure_success(client.get("/domains")?)?;
        decode_list(&response, "domain")
    }

    /// Add a domain to the account for DNS hosting (no registration).
    pub fn create(client: &Client, name: &str) -> Result<Domain> {
        let body = json!({ "domain": { "name": name } });
        let response = ensure_success(client.post("/domains", body)?)?;
        decode_one(&response, "domain")
    }

    pub fn register(
        client: &Client,
        name: &str,
        registrant_id: &str,
        extended: &Attributes,
    ) -> Result<Domain> {
        let body = with_extended_attributes(
            json!({ "domain": { "name": name, "registrant_id": registrant_id } }),
            extended,
        );
        let response = ensure_success(client.post("/domain_registrations", body)?)?;
        decode_one(&response, "domain")
    }

    pub fn check(client: &Client, name: &str) -> Result<Availability> {
        let response = client.get(&format!("/domains/{}/check", segment(name)?))?;
        match response.status {
            200 => Ok(Availability::Registered),
            404 => Ok(Availability::Available),
            status => Err(DnsimpleError::Request {
                status,
                body: response.body,
            }),
        }
    }

    pub fn delete(client: &Client, name: &str) -> Result<()> {
        let response = client.delete(&format!("/domains/{}", segment(name)?))?;
        ensure_found(response, "domain", name)?;
        Ok(())
    }

    pub fn apply_template(&self, client: &Client, template: &str) -> Result<()> {
        let path = format!(
            "/domains/{}/templates/{}/apply",
            segment(&self.name)?,
            segment(template)?
        );
        let response = client.post(&path, json!({}))?;
        ensure_found(response, "template", template)?;
        Ok(())
    }

    pub fn applied_services(&self, client: &Client) -> Result<Vec<Service>> {
        let path = format!("/domains/{}/applied_services", segment(&self.name)?);
        let response = client.get(&path)?;
        let response = ensure_success(response)?;
        decode_list(&response, "service")
    }

    pub fn available_services(&self, client: &Client) -> Result<Vec<Service>> {
        let path = format!("/domains/{}/available_services", segment(&self.name)?);
        let response = client.get(&path)?;
        let response = ensure_success(response)?;
        decode_list(&response, "service")
    }

    pub fn add_service(&self, client: &Client, service: &str) -> Result<()> {
        let path = format!("/domains/{}/applied_services", segment(&self.name)?);
        let response = client.post(&path, json!({ "service": { "id": service } }))?;
        ensure_found(response, "service", service)?;
        Ok(())
    }

    pub fn remove_service(&self, client: &Client, service: &str) -> Result<()> {
        let path = format!(
            "/domains/{}/applied_services/{}",
            segment(&self.name)?,
            segment(service)?
        );
        ensure_found(client.delete(&path)?, "service", service)?;
        Ok(())
    }
}
