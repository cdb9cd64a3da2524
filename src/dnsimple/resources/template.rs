use super::{decode_list, decode_one, ensure_found, ensure_success, segment, NewRecord};
use crate::client::Client;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

/// A reusable set of records that can be applied to domains.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Template {
    pub id: u64,
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateRecord {
    pub id: u64,
    pub dns_template_id: Option<u64>,
    pub name: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub prio: Option<u32>,
    pub record_type: String,
}

impl Template {
    /// Look up a template by short name or id.
    pub fn find(client: &Client, id: &str) -> Result<Template> {
        let path = format!("/templates/{}", segment(id)?);
        let response = ensure_found(client.get(&path)?, "template", id)?;
        decode_one(&response, "dns_template")
    }

    pub fn all(client: &Client) -> Result<Vec<Template>> {
        decode_list(&ensure_success(client.get("/templates")?)?, "dns_template")
    }

    pub fn create(
        client: &Client,
        name: &str,
        short_name: &str,
        description: Option<&str>,
    ) -> Result<Template> {
        let body = json!({ "dns_template": {
            "name": name,
            "short_name": short_name,
            "description": description.unwrap_or_default(),
        }});
        decode_one(&ensure_success(client.post("/templates", body)?)?, "dns_template")
    }

    pub fn delete(client: &Client, id: &str) -> Result<()> {
        ensure_found(client.delete(&format!("/templates/{}", segment(id)?))?, "template", id)?;
        Ok(())
    }
}

impl TemplateRecord {
    pub fn all(client: &Client, template: &str) -> Result<Vec<TemplateRecord>> {
        let response = client.get(&format!("/templates/{}/template_records", segment(template)?))?;
        let response = ensure_found(response, "template", template)?;
        decode_list(&response, "dns_template_record")
    }

    pub fn create(client: &Client, template: &str, record: &NewRecord) -> Result<TemplateRecord> {
        let path = format!("/templates/{}/template_records", segment(template)?);
        let response = client.post(&path, json!({ "dns_template_record": record }))?;
        let response = ensure_found(response, "template", template)?;
        decode_one(&response, "dns_template_record")
    }

    pub fn delete(client: &Client, template: &str, id: &str) -> Result<()> {
        let path = format!("/templates/{}/template_records/{}", segment(template)?, segment(id)?);
        ensure_found(client.delete(&path)?, "template record", id)?;
        Ok(())
    }
}
