//! In-process record store with the same semantics as the REST backend.
//!
//! Used by unit tests and the integration suite so flows can run without a
//! network. Matches the managed store's contract: IDs assigned at creation,
//! `createdAt` stamped server-side, equality filters, ascending multi-field
//! ordering.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, FieldEquals, StoreError};

type Collection = HashMap<String, Map<String, Value>>;

/// In-memory document store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) async fn create(
        &self,
        collection: &str,
        fields: &Value,
    ) -> Result<String, StoreError> {
        let mut stored = fields
            .as_object()
            .cloned()
            .ok_or_else(|| StoreError::Rejected("document fields must be an object".into()))?;
        stored.insert("createdAt".to_owned(), Value::String(Utc::now().to_rfc3339()));

        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id.clone(), stored);
        Ok(id)
    }

    pub(super) async fn query(
        &self,
        collection: &str,
        order_by: &[&str],
        filters: &[FieldEquals],
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let mut documents: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, fields)| matches_filters(fields, filters))
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: Value::Object(fields.clone()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        documents.sort_by(|a, b| compare_ordered(a, b, order_by));
        Ok(documents)
    }

    pub(super) async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<(), StoreError> {
        let mut stored = fields
            .as_object()
            .cloned()
            .ok_or_else(|| StoreError::Rejected("document fields must be an object".into()))?;
        stored.insert("createdAt".to_owned(), Value::String(Utc::now().to_rfc3339()));

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id.to_owned(), stored);
        Ok(())
    }

    pub(super) async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<(), StoreError> {
        let partial = fields
            .as_object()
            .ok_or_else(|| StoreError::Rejected("update fields must be an object".into()))?;

        let mut collections = self.collections.write().await;
        let stored = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{id}")))?;

        for (key, value) in partial {
            stored.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    pub(super) async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id))
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{id}")))?;
        Ok(())
    }

    pub(super) async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_owned(),
                fields: Value::Object(fields.clone()),
            }))
    }
}

fn matches_filters(fields: &Map<String, Value>, filters: &[FieldEquals]) -> bool {
    filters
        .iter()
        .all(|clause| fields.get(&clause.field) == Some(&clause.equals))
}

/// Ascending comparison over the ordering fields, field by field.
fn compare_ordered(a: &Document, b: &Document, order_by: &[&str]) -> Ordering {
    for field in order_by {
        let left = a.fields.get(*field);
        let right = b.fields.get(*field);
        let ordering = compare_values(left, right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    // Stable tiebreak so repeated queries return identical sequences.
    a.id.cmp(&b.id)
}

fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::String(l)), Some(Value::String(r))) => l.cmp(r),
        (Some(l), Some(r)) => l.to_string().cmp(&r.to_string()),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
