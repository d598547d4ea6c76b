use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::{AppError, AppResult};
use crate::infrastructure::constant::{FIELD_CREATED_AT, FIELD_ID, FIELD_UPDATED_AT};
use crate::infrastructure::store::Document;

pub mod address_repository;
pub mod comment_repository;
pub mod profile_repository;

/// Serializes a model into the caller-owned field map of a document. The id
/// and timestamps travel outside the field map; the store owns them.
pub(crate) fn document_fields<T: Serialize>(model: &T) -> AppResult<Map<String, Value>> {
    match serde_json::to_value(model)? {
        Value::Object(mut map) => {
            map.remove(FIELD_ID);
            map.remove(FIELD_CREATED_AT);
            map.remove(FIELD_UPDATED_AT);
            Ok(map)
        }
        _ => Err(AppError::StoreError(
            "model did not serialize to a document object".to_string(),
        )),
    }
}

pub(crate) fn decode_document<T: DeserializeOwned>(document: &Document) -> AppResult<T> {
    Ok(serde_json::from_value(document.to_value())?)
}

/// Decodes a result set, dropping documents that no longer match the model
/// shape instead of failing the whole read.
pub(crate) fn decode_documents<T: DeserializeOwned>(documents: &[Document], kind: &str) -> Vec<T> {
    documents
        .iter()
        .filter_map(|document| match decode_document(document) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!("skipping undecodable {} document {}: {}", kind, document.id, e);
                None
            }
        })
        .collect()
}
