//! The employee record type and its index schema.
//!
//! An employee is a flat mapping of identifier-like string fields keyed by
//! `CompanyId`. The seven known fields are typed; anything else the client
//! sends is carried along untouched for forward compatibility with the
//! schemaless documents the service historically stored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// The index holding employee records.
pub const INDEX_NAME: &str = "company";

/// The field acting as the unique identifier.
pub const ID_FIELD: &str = "CompanyId";

/// Every required field, in the order error messages list them.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "CompanyId",
    "Email",
    "Password",
    "PortalId",
    "RoleId",
    "StatusId",
    "Username",
];

/// The index mapping: every known field is an exact-match identifier.
pub fn index_mapping() -> Value {
    json!({
        "properties": {
            "CompanyId": { "type": "keyword" },
            "Email": { "type": "keyword" },
            "Password": { "type": "keyword" },
            "PortalId": { "type": "keyword" },
            "RoleId": { "type": "keyword" },
            "StatusId": { "type": "keyword" },
            "Username": { "type": "keyword" }
        }
    })
}

/// A company employee record.
///
/// Missing fields deserialize to empty strings and fail [`Employee::is_valid`];
/// unknown fields are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier within the index.
    #[serde(rename = "CompanyId", default)]
    pub company_id: String,

    /// Contact email.
    #[serde(rename = "Email", default)]
    pub email: String,

    /// Login password (stored as-is; hashing is out of scope here).
    #[serde(rename = "Password", default)]
    pub password: String,

    /// Portal the employee belongs to.
    #[serde(rename = "PortalId", default)]
    pub portal_id: String,

    /// Role identifier.
    #[serde(rename = "RoleId", default)]
    pub role_id: String,

    /// Status identifier.
    #[serde(rename = "StatusId", default)]
    pub status_id: String,

    /// Login name.
    #[serde(rename = "Username", default)]
    pub username: String,

    /// Fields outside the declared schema, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Employee {
    /// Whether every required field is present and non-empty.
    pub fn is_valid(&self) -> bool {
        !self.company_id.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.portal_id.is_empty()
            && !self.role_id.is_empty()
            && !self.status_id.is_empty()
            && !self.username.is_empty()
    }

    /// The record's unique identifier.
    pub fn id(&self) -> &str {
        &self.company_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "CompanyId": "1",
            "Email": "a@x.com",
            "Password": "p",
            "PortalId": "p1",
            "RoleId": "r1",
            "StatusId": "s1",
            "Username": "u1"
        })
    }

    #[test]
    fn test_full_record_is_valid() {
        let employee: Employee = serde_json::from_value(full_record()).unwrap();
        assert!(employee.is_valid());
        assert_eq!(employee.id(), "1");
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let mut record = full_record();
        record.as_object_mut().unwrap().remove("Username");
        let employee: Employee = serde_json::from_value(record).unwrap();
        assert!(!employee.is_valid());
    }

    #[test]
    fn test_empty_field_is_invalid() {
        let mut record = full_record();
        record["Email"] = json!("");
        let employee: Employee = serde_json::from_value(record).unwrap();
        assert!(!employee.is_valid());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let mut record = full_record();
        record["Department"] = json!("search");
        let employee: Employee = serde_json::from_value(record.clone()).unwrap();
        assert_eq!(employee.extra["Department"], "search");

        let back = serde_json::to_value(&employee).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_mapping_types_all_keyword() {
        let mapping = index_mapping();
        let props = mapping["properties"].as_object().unwrap();
        assert_eq!(props.len(), REQUIRED_FIELDS.len());
        for field in REQUIRED_FIELDS {
            assert_eq!(props[field]["type"], "keyword", "field {}", field);
        }
    }
}
