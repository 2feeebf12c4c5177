//! In-process `DocumentStore` implementation.
//!
//! Holds every collection in memory behind a `tokio` lock. Used for local runs
//! and as the substitute store in tests; it mirrors the query semantics of the
//! managed document database (missing fields never match, ids are generated).

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AdapterError;
use crate::models::{compare_values, Direction, Document, FilterOp};
use crate::DocumentStore;

#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn add(
        &self,
        collection: &str,
        data: Map<String, Value>,
    ) -> Result<String, AdapterError> {
        if collection.is_empty() {
            return Err(AdapterError::InvalidDocument(
                "collection name must not be empty".into(),
            ));
        }

        let id = generate_id();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), data));

        log::debug!("added document {} to {}", id, collection);
        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        field: &str,
        op: FilterOp,
        value: Value,
    ) -> Result<Vec<Document>, AdapterError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|doc| doc.field(field).is_some_and(|f| op.matches(f, &value)))
            .cloned()
            .collect())
    }

    async fn query_ordered(
        &self,
        collection: &str,
        field: &str,
        direction: Direction,
        limit: usize,
    ) -> Result<Vec<Document>, AdapterError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matching: Vec<&Document> =
            docs.iter().filter(|doc| doc.field(field).is_some()).collect();

        matching.sort_by(|a, b| {
            let ordering = match (a.field(field), b.field(field)) {
                (Some(a), Some(b)) => compare_values(a, b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            };
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });

        Ok(matching.into_iter().take(limit).cloned().collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AdapterError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[tokio::test]
    async fn add_then_get() {
        let store = InMemoryStore::new();
        let id = store
            .add("courses", doc(json!({ "name": "CS101" })))
            .await
            .unwrap();

        let found = store.get("courses", &id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.field("name"), Some(&json!("CS101")));

        assert!(store.get("courses", "missing").await.unwrap().is_none());
        assert!(store.get("unknown", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn generated_ids_are_unique() {
        let store = InMemoryStore::new();
        let a = store.add("votes", Map::new()).await.unwrap();
        let b = store.add("votes", Map::new()).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len("votes").await, 2);
    }

    #[tokio::test]
    async fn empty_collection_name_is_rejected() {
        let store = InMemoryStore::new();
        let err = store.add("", Map::new()).await.unwrap_err();
        assert!(matches!(err, AdapterError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn query_filters_on_field() {
        let store = InMemoryStore::new();
        store
            .add("attendance", doc(json!({ "courseId": "c1", "uid": "a" })))
            .await
            .unwrap();
        store
            .add("attendance", doc(json!({ "courseId": "c2", "uid": "b" })))
            .await
            .unwrap();
        store
            .add("attendance", doc(json!({ "uid": "c" })))
            .await
            .unwrap();

        let c1 = store
            .query("attendance", "courseId", FilterOp::Eq, json!("c1"))
            .await
            .unwrap();
        assert_eq!(c1.len(), 1);
        assert_eq!(c1[0].field("uid"), Some(&json!("a")));

        let not_c1 = store
            .query("attendance", "courseId", FilterOp::NotEq, json!("c1"))
            .await
            .unwrap();
        assert_eq!(not_c1.len(), 1);

        let none = store
            .query("nothing", "courseId", FilterOp::Eq, json!("c1"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn query_ordered_sorts_and_limits() {
        let store = InMemoryStore::new();
        for ts in ["2024-01-02", "2024-01-01", "2024-01-03"] {
            store
                .add("votes", doc(json!({ "time_cast": ts })))
                .await
                .unwrap();
        }
        store
            .add("votes", doc(json!({ "team": "TABS" })))
            .await
            .unwrap();

        let newest = store
            .query_ordered("votes", "time_cast", Direction::Descending, 2)
            .await
            .unwrap();
        let times: Vec<_> = newest.iter().map(|d| d.field("time_cast").unwrap()).collect();
        assert_eq!(times, vec![&json!("2024-01-03"), &json!("2024-01-02")]);

        let all = store
            .query_ordered("votes", "time_cast", Direction::Ascending, 10)
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].field("time_cast"), Some(&json!("2024-01-01")));
    }
}
