use super::domain::with_extended_attributes;
use super::{decode_one, ensure_success, Attributes};
use crate::client::Client;
use crate::error::Result;
use serde::Deserialize;
use serde_json::json;

/// A pending inbound domain transfer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransferOrder {
    pub id: u64,
    pub status: Option<String>,
}

impl TransferOrder {
    pub fn create(
        client: &Client,
        name: &str,
        registrant_id: &str,
        authinfo: Option<&str>,
        extended: &Attributes,
    ) -> Result<TransferOrder> {
        let mut body = json!({ "domain": { "name": name, "registrant_id": registrant_id } });
        if let Some(authinfo) = authinfo {
            body["transfer_order"] = json!({ "authinfo": authinfo });
        }
        let body = with_extended_attributes(body, extended);
        let response = ensure_success(client.post("/domain_transfers", body)?)?;
        decode_one(&response, "transfer_order")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MockTransport;

    #[test]
    fn sends_authinfo_when_given() {
        let mock = MockTransport::new();
        mock.respond_json(201, json!({"transfer_order": {"id": 1, "status": "new"}}));

        let order =
            TransferOrder::create(&mock.client(), "example.com", "10", Some("xyz"), &Attributes::new())
                .unwrap();
        assert_eq!(order.status.as_deref(), Some("new"));
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({
                "domain": {"name": "example.com", "registrant_id": "10"},
                "transfer_order": {"authinfo": "xyz"}
            }))
        );
    }
}
