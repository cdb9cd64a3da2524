//! # Entities
//!
//! Each module holds one flat record mirroring a JSON resource, together with
//! the associated functions that fetch or create it. Every function issues a
//! single request through the [`Client`](crate::client::Client) and maps the
//! outcome the same way:
//!
//! - `2xx`: decode the entity (or list of entities) from the body
//! - `404` on a lookup: [`DnsimpleError::NotFound`] carrying the identifier
//! - anything else: [`DnsimpleError::Request`] carrying status and raw body
//!
//! The API wraps objects in a single-key envelope (`{"domain": {...}}`) and
//! returns lists as arrays of envelopes. Decoding unwraps the envelope and
//! also accepts bare objects. Fields are mapped explicitly by serde; keys the
//! records do not know about are ignored.

use crate::error::{DnsimpleError, Result};
use crate::transport::ApiResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

pub mod certificate;
pub mod contact;
pub mod domain;
pub mod extended_attribute;
pub mod record;
pub mod service;
pub mod template;
pub mod transfer_order;
pub mod user;

pub use certificate::Certificate;
pub use contact::Contact;
pub use domain::{Availability, Domain};
pub use extended_attribute::{ExtendedAttribute, ExtendedAttributeOption};
pub use record::{NewRecord, Record};
pub use service::Service;
pub use template::{Template, TemplateRecord};
pub use transfer_order::TransferOrder;
pub use user::User;

/// Free-form `name -> value` attributes (contact fields, record changes,
/// registry extended attributes).
pub type Attributes = BTreeMap<String, String>;

pub(crate) fn ensure_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(DnsimpleError::Request {
            status: response.status,
            body: response.body,
        })
    }
}

pub(crate) fn ensure_found(
    response: ApiResponse,
    resource: &'static str,
    id: &str,
) -> Result<ApiResponse> {
    if response.status == 404 {
        return Err(DnsimpleError::not_found(resource, id));
    }
    ensure_success(response)
}

/// Percent-encode one path segment. `.` and `..` are rejected: URL
/// normalisation would resolve them against the parent path.
pub(crate) fn segment(value: &str) -> Result<Cow<'_, str>> {
    if value == "." || value == ".." {
        return Err(DnsimpleError::InvalidIdentifier(value.to_string()));
    }
    Ok(urlencoding::encode(value))
}

pub(crate) fn decode_one<T: DeserializeOwned>(response: &ApiResponse, key: &str) -> Result<T> {
    let value: Value = response.json()?;
    Ok(serde_json::from_value(unwrap_envelope(value, key))?)
}

pub(crate) fn decode_list<T: DeserializeOwned>(response: &ApiResponse, key: &str) -> Result<Vec<T>> {
    let values: Vec<Value> = response.json()?;
    values
        .into_iter()
        .map(|value| Ok(serde_json::from_value(unwrap_envelope(value, key))?))
        .collect()
}

fn unwrap_envelope(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(key) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: u64,
    }

    #[test]
    fn unwraps_envelopes_and_accepts_bare_objects() {
        let wrapped = ApiResponse::new(200, json!({"thing": {"id": 1}}).to_string());
        let bare = ApiResponse::new(200, json!({"id": 2}).to_string());
        assert_eq!(decode_one::<Thing>(&wrapped, "thing").unwrap(), Thing { id: 1 });
        assert_eq!(decode_one::<Thing>(&bare, "thing").unwrap(), Thing { id: 2 });
    }

    #[test]
    fn decodes_lists_of_envelopes() {
        let response = ApiResponse::new(
            200,
            json!([{"thing": {"id": 1}}, {"thing": {"id": 2}}]).to_string(),
        );
        let things: Vec<Thing> = decode_list(&response, "thing").unwrap();
        assert_eq!(things, vec![Thing { id: 1 }, Thing { id: 2 }]);
    }

    #[test]
    fn not_found_carries_identifier() {
        let err = ensure_found(ApiResponse::new(404, ""), "domain", "example.com").unwrap_err();
        assert!(matches!(
            err,
            DnsimpleError::NotFound { resource: "domain", ref id } if id == "example.com"
        ));
    }

    #[test]
    fn other_failures_carry_body() {
        let err = ensure_found(ApiResponse::new(500, "boom"), "domain", "x").unwrap_err();
        assert!(matches!(
            err,
            DnsimpleError::Request { status: 500, ref body } if body == "boom"
        ));
    }

    #[test]
    fn segments_cannot_leave_their_position() {
        assert_eq!(segment("example.com").unwrap(), "example.com");
        assert_eq!(segment("42/../other.com").unwrap(), "42%2F..%2Fother.com");
        assert_eq!(segment("a b?c#d").unwrap(), "a%20b%3Fc%23d");
        assert!(matches!(segment(".."), Err(DnsimpleError::InvalidIdentifier(_))));
        assert!(matches!(segment("."), Err(DnsimpleError::InvalidIdentifier(_))));
    }

    #[test]
    fn malformed_body_is_a_serialization_error() {
        let err = decode_one::<Thing>(&ApiResponse::new(200, "<html>"), "thing").unwrap_err();
        assert!(matches!(err, DnsimpleError::Json(_)));
    }
}
