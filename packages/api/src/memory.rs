use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::backend::{Backend, Query};
use crate::error::ApiError;

/// In-process JSON collections with the same contract as the REST backend.
/// Records get a `_id` on create; list filters compare fields as strings.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    offline: Arc<Mutex<bool>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record as-is, for test fixtures.
    pub fn seed<T: Serialize>(&self, collection: &str, record: &T) {
        if let (Ok(value), Ok(mut collections)) = (serde_json::to_value(record), self.collections.lock()) {
            collections.entry(collection.to_string()).or_default().push(value);
        }
    }

    /// While offline every call fails with [`ApiError::Network`].
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut flag) = self.offline.lock() {
            *flag = offline;
        }
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn ensure_online(&self) -> Result<(), ApiError> {
        match self.offline.lock() {
            Ok(flag) if *flag => Err(ApiError::Network("backend unreachable".into())),
            Ok(_) => Ok(()),
            Err(_) => Err(ApiError::Network("backend state poisoned".into())),
        }
    }

    fn with_collections<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Vec<Value>>) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        self.ensure_online()?;
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| ApiError::Network("backend state poisoned".into()))?;
        f(&mut collections)
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("_id").and_then(Value::as_str)
}

fn field_matches(record: &Value, field: &str, expected: &str) -> bool {
    match record.get(field) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    }
}

impl Backend for MemoryBackend {
    async fn list<T: DeserializeOwned>(&self, collection: &str, query: Query<'_>) -> Result<Vec<T>, ApiError> {
        let matching = self.with_collections(|collections| {
            Ok(collections
                .get(collection)
                .map(|records| {
                    records
                        .iter()
                        .filter(|r| query.iter().all(|(field, value)| field_matches(r, field, value)))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default())
        })?;
        matching
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(ApiError::from))
            .collect()
    }

    async fn create<T: Serialize, R: DeserializeOwned>(&self, collection: &str, body: &T) -> Result<R, ApiError> {
        let mut record = serde_json::to_value(body)?;
        let Some(fields) = record.as_object_mut() else {
            return Err(ApiError::Status {
                status: 400,
                message: "body must be a JSON object".into(),
            });
        };
        fields.insert("_id".into(), Value::String(uuid::Uuid::new_v4().simple().to_string()));
        let stored = record.clone();
        self.with_collections(|collections| {
            collections.entry(collection.to_string()).or_default().push(stored);
            Ok(())
        })?;
        Ok(serde_json::from_value(record)?)
    }

    async fn replace<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let mut record = serde_json::to_value(body)?;
        if let Some(fields) = record.as_object_mut() {
            fields.insert("_id".into(), Value::String(id.to_string()));
        }
        let stored = record.clone();
        self.with_collections(|collections| {
            let slot = collections
                .get_mut(collection)
                .and_then(|records| records.iter_mut().find(|r| record_id(r) == Some(id)))
                .ok_or_else(|| ApiError::not_found(collection, id))?;
            *slot = stored;
            Ok(())
        })?;
        Ok(serde_json::from_value(record)?)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        self.with_collections(|collections| {
            let records = collections
                .get_mut(collection)
                .ok_or_else(|| ApiError::not_found(collection, id))?;
            let index = records
                .iter()
                .position(|r| record_id(r) == Some(id))
                .ok_or_else(|| ApiError::not_found(collection, id))?;
            records.remove(index);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_collection_contract() {
        let backend = MemoryBackend::new();
        let created: Value = backend
            .create("shipments", &json!({"iduser": "u1", "cargokg": 1200}))
            .await
            .unwrap();
        let id = created["_id"].as_str().unwrap().to_string();
        backend
            .create::<_, Value>("shipments", &json!({"iduser": "u2"}))
            .await
            .unwrap();

        let mine: Vec<Value> = backend.list("shipments", &[("iduser", "u1")]).await.unwrap();
        assert_eq!(mine.len(), 1);
        let heavy: Vec<Value> = backend.list("shipments", &[("cargokg", "1200")]).await.unwrap();
        assert_eq!(heavy.len(), 1);

        let replaced: Value = backend
            .replace("shipments", &id, &json!({"iduser": "u1", "status": "Confirmed"}))
            .await
            .unwrap();
        assert_eq!(replaced["_id"], id.as_str());
        assert_eq!(replaced["status"], "Confirmed");
        assert!(replaced.get("cargokg").is_none());

        backend.delete("shipments", &id).await.unwrap();
        assert_eq!(backend.len("shipments"), 1);
        assert_eq!(
            backend.delete("shipments", &id).await,
            Err(ApiError::not_found("shipments", &id))
        );
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let backend = MemoryBackend::new();
        backend.set_offline(true);
        let listed: Result<Vec<Value>, _> = backend.list("users", &[]).await;
        assert!(matches!(listed, Err(ApiError::Network(_))));
        backend.set_offline(false);
        let listed: Vec<Value> = backend.list("users", &[]).await.unwrap();
        assert!(listed.is_empty());
    }
}
