use super::{decode_list, decode_one, ensure_found, ensure_success, segment, Attributes, Domain};
use crate::client::Client;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: u64,
    pub domain_id: Option<u64>,
    pub name: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub prio: Option<u32>,
    pub record_type: String,
    pub system_record: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields sent when creating a zone or template record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub name: String,
    pub record_type: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<u32>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: None,
            prio: None,
        }
    }
}

/// `name.domain`, or just `domain` for apex records.
pub(crate) fn qualify(name: &str, domain: &str) -> String {
    if name.is_empty() {
        domain.to_string()
    } else {
        format!("{}.{}", name, domain)
    }
}

impl Record {
    pub fn fqdn(&self, domain: &str) -> String {
        qualify(&self.name, domain)
    }

    pub fn find(client: &Client, domain: &Domain, id: &str) -> Result<Record> {
        let path = format!("/domains/{}/records/{}", segment(&domain.name)?, segment(id)?);
        let response = client.get(&path)?;
        let response = ensure_found(response, "record", id)?;
        decode_one(&response, "record")
    }

    pub fn all(client: &Client, domain: &Domain) -> Result<Vec<Record>> {
        let response = client.get(&format!("/domains/{}/records", segment(&domain.name)?))?;
        decode_list(&ensure_success(response)?, "record")
    }

    pub fn create(client: &Client, domain: &Domain, record: &NewRecord) -> Result<Record> {
        let path = format!("/domains/{}/records", segment(&domain.name)?);
        let response = ensure_success(client.post(&path, json!({ "record": record }))?)?;
        decode_one(&response, "record")
    }

    pub fn update(
        client: &Client,
        domain: &Domain,
        id: &str,
        changes: &Attributes,
    ) -> Result<Record> {
        let path = format!("/domains/{}/records/{}", segment(&domain.name)?, segment(id)?);
        let response = client.put(&path, json!({ "record": changes }))?;
        let response = ensure_found(response, "record", id)?;
        decode_one(&response, "record")
    }

    pub fn delete(client: &Client, domain: &Domain, id: &str) -> Result<()> {
        let path = format!("/domains/{}/records/{}", segment(&domain.name)?, segment(id)?);
        ensure_found(client.delete(&path)?, "record", id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnsimpleError;
    use crate::transport::memory::MockTransport;
    use crate::transport::HttpMethod;

    fn example() -> Domain {
        Domain {
            id: 1,
            name: "example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn fqdn_handles_apex() {
        let mut record = Record {
            name: "www".into(),
            ..Default::default()
        };
        assert_eq!(record.fqdn("example.com"), "www.example.com");
        record.name.clear();
        assert_eq!(record.fqdn("example.com"), "example.com");
    }

    #[test]
    fn create_serializes_only_present_fields() {
        let mock = MockTransport::new();
        mock.respond_json(
            201,
            json!({"record": {"id": 42, "name": "www", "record_type": "A", "content": "1.2.3.4", "ttl": 3600}}),
        );

        let record = Record::create(
            &mock.client(),
            &example(),
            &NewRecord::new("www", "A", "1.2.3.4"),
        )
        .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.ttl, Some(3600));
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"record": {"name": "www", "record_type": "A", "content": "1.2.3.4"}}))
        );
    }

    #[test]
    fn find_404_carries_record_id() {
        let mock = MockTransport::new();
        mock.respond(404, "");
        let err = Record::find(&mock.client(), &example(), "99").unwrap_err();
        assert!(matches!(err, DnsimpleError::NotFound { resource: "record", ref id } if id == "99"));
    }

    #[test]
    fn update_puts_changes() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({"record": {"id": 5, "content": "5.6.7.8"}}));

        let mut changes = Attributes::new();
        changes.insert("content".into(), "5.6.7.8".into());
        let record = Record::update(&mock.client(), &example(), "5", &changes).unwrap();

        assert_eq!(record.content, "5.6.7.8");
        let sent = &mock.requests()[0];
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.path, "/domains/example.com/records/5");
    }

    #[test]
    fn delete_uses_record_path() {
        let mock = MockTransport::new();
        mock.respond(200, "");
        Record::delete(&mock.client(), &example(), "42").unwrap();
        let sent = &mock.requests()[0];
        assert_eq!(sent.method, HttpMethod::Delete);
        assert_eq!(sent.path, "/domains/example.com/records/42");
    }

    #[test]
    fn traversal_in_record_id_stays_under_records() {
        let mock = MockTransport::new();
        mock.respond(200, "");
        Record::delete(&mock.client(), &example(), "42/../../../other.com").unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.path, "/domains/example.com/records/42%2F..%2F..%2F..%2Fother.com");
        let resolved = reqwest::Url::parse(&sent.url).unwrap();
        assert!(resolved.path().starts_with("/domains/example.com/records/"));
    }

    #[test]
    fn dot_segment_id_is_rejected_before_sending() {
        let mock = MockTransport::new();
        let err = Record::delete(&mock.client(), &example(), "..").unwrap_err();
        assert!(matches!(err, DnsimpleError::InvalidIdentifier(ref id) if id == ".."));
        assert!(mock.requests().is_empty());
    }
}
