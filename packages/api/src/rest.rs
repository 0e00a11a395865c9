use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{Backend, Query};
use crate::error::ApiError;

/// HTTP client for the JSON collections backend.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Self::build_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build_client() -> Client {
        Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_default()
    }

    // the browser fetch API owns timeouts on wasm
    #[cfg(target_arch = "wasm32")]
    fn build_client() -> Client {
        Client::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        let message = match message.trim() {
            "" => status.canonical_reason().unwrap_or("request failed").to_string(),
            body => body.to_string(),
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        let response = Self::check(response).await?;
        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for RestBackend {
    async fn list<T: DeserializeOwned>(&self, collection: &str, query: Query<'_>) -> Result<Vec<T>, ApiError> {
        tracing::debug!(collection, ?query, "GET");
        let response = self
            .client
            .get(self.collection_url(collection))
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create<T: Serialize, R: DeserializeOwned>(&self, collection: &str, body: &T) -> Result<R, ApiError> {
        tracing::debug!(collection, "POST");
        let response = self
            .client
            .post(self.collection_url(collection))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn replace<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        tracing::debug!(collection, id, "PUT");
        let response = self
            .client
            .put(self.record_url(collection, id))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        tracing::debug!(collection, id, "DELETE");
        let response = self.client.delete(self.record_url(collection, id)).send().await?;
        Self::check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let backend = RestBackend::new("http://localhost:3000/");
        assert_eq!(backend.base_url(), "http://localhost:3000");
        assert_eq!(backend.collection_url("users"), "http://localhost:3000/users");
        assert_eq!(
            backend.record_url("shipments", "s1"),
            "http://localhost:3000/shipments/s1"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // port 9 (discard) is closed on test machines
        let backend = RestBackend::new("http://127.0.0.1:9");
        let result: Result<Vec<serde_json::Value>, _> = backend.list("users", &[]).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
