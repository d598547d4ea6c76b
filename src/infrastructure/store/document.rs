use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::infrastructure::constant::{
    FIELD_ADDRESS_ID, FIELD_CREATED_AT, FIELD_ID, FIELD_IS_PUBLIC, FIELD_UPDATED_AT, FIELD_USER_ID,
};

/// One stored document: caller-owned fields plus the store-assigned
/// timestamps. `created_at` is set on first write and preserved across
/// updates; `updated_at` moves on every write.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Full JSON view of the document: the fields merged with `id` and the
    /// store-assigned timestamps. Repositories deserialize models from this.
    pub fn to_value(&self) -> Value {
        let mut merged = self.fields.clone();
        merged.insert(FIELD_ID.to_string(), Value::String(self.id.clone()));
        merged.insert(
            FIELD_CREATED_AT.to_string(),
            Value::String(self.created_at.to_rfc3339()),
        );
        merged.insert(
            FIELD_UPDATED_AT.to_string(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        Value::Object(merged)
    }
}

/// The only query shapes this system uses against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    UserIdEq(String),
    AddressIdEq(String),
    IsPublicEq(bool),
    All,
}

impl Predicate {
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Predicate::UserIdEq(user_id) => {
                doc.fields.get(FIELD_USER_ID).and_then(Value::as_str) == Some(user_id)
            }
            Predicate::AddressIdEq(address_id) => {
                doc.fields.get(FIELD_ADDRESS_ID).and_then(Value::as_str) == Some(address_id)
            }
            Predicate::IsPublicEq(is_public) => {
                doc.fields.get(FIELD_IS_PUBLIC).and_then(Value::as_bool) == Some(*is_public)
            }
            Predicate::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    CreatedAtDesc,
    Unspecified,
}

/// What a live query delivers: the complete current result set on connect
/// and again on every matching change, or a subscription-level failure.
#[derive(Debug, Clone)]
pub enum SnapshotEvent {
    Snapshot(Vec<Document>),
    Error(String),
}
