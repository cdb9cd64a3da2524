use super::record::qualify;
use super::{decode_list, decode_one, ensure_found, ensure_success, segment, Domain};
use crate::client::Client;
use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

/// An SSL certificate ordered for a name under a domain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub id: u64,
    pub domain_id: Option<u64>,
    pub contact_id: Option<u64>,
    pub name: String,
    pub state: Option<String>,
    pub csr: Option<String>,
    pub ssl_certificate: Option<String>,
    pub private_key: Option<String>,
    pub approver_email: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Certificate {
    pub fn fqdn(&self, domain: &str) -> String {
        qualify(&self.name, domain)
    }

    pub fn find(client: &Client, domain: &Domain, id: &str) -> Result<Certificate> {
        let path = format!("/domains/{}/certificates/{}", segment(&domain.name)?, segment(id)?);
        let response = ensure_found(client.get(&path)?, "certificate", id)?;
        decode_one(&response, "certificate")
    }

    pub fn all(client: &Client, domain: &Domain) -> Result<Vec<Certificate>> {
        let path = format!("/domains/{}/certificates", segment(&domain.name)?);
        decode_list(&ensure_success(client.get(&path)?)?, "certificate")
    }

    pub fn purchase(
        client: &Client,
        domain: &Domain,
        name: &str,
        contact_id: &str,
    ) -> Result<Certificate> {
        let path = format!("/domains/{}/certificates", segment(&domain.name)?);
        let body = json!({ "certificate": { "name": name, "contact_id": contact_id } });
        decode_one(&ensure_success(client.post(&path, body)?)?, "certificate")
    }

    pub fn submit(
        client: &Client,
        domain: &Domain,
        id: &str,
        approver_email: &str,
    ) -> Result<Certificate> {
        let path = format!(
            "/domains/{}/certificates/{}/submit",
            segment(&domain.name)?,
            segment(id)?
        );
        let body = json!({ "certificate": { "approver_email": approver_email } });
        let response = ensure_found(client.put(&path, body)?, "certificate", id)?;
        decode_one(&response, "certificate")
    }
}
