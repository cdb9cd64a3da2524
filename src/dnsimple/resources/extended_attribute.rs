use super::{decode_list, ensure_found, segment};
use crate::client::Client;
use crate::error::Result;
use serde::Deserialize;

/// Registry-specific data a TLD requires at registration or transfer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtendedAttribute {
    pub name: String,
    pub description: Option<String>,
    pub required: bool,
    pub options: Vec<ExtendedAttributeOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtendedAttributeOption {
    pub title: String,
    pub value: String,
    pub description: Option<String>,
}

impl ExtendedAttribute {
    pub fn find(client: &Client, tld: &str) -> Result<Vec<ExtendedAttribute>> {
        let tld = tld.trim_start_matches('.');
        let response = client.get(&format!("/extended_attributes/{}", segment(tld)?))?;
        decode_list(&ensure_found(response, "TLD", tld)?, "extended_attribute")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MockTransport;
    use serde_json::json;

    #[test]
    fn decodes_bare_attribute_list() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!([{
                "name": "us_nexus",
                "description": "The nexus category",
                "required": true,
                "options": [{"title": "US citizen", "value": "C11"}]
            }]),
        );

        let attributes = ExtendedAttribute::find(&mock.client(), ".us").unwrap();
        assert!(attributes[0].required);
        assert_eq!(attributes[0].options[0].value, "C11");
        assert_eq!(mock.requests()[0].path, "/extended_attributes/us");
    }
}
