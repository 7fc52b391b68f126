use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{NewTrendRecord, TrendRecord, TrendStore};
use crate::config::AppwriteConfig;
use crate::error::TrendStoreError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendRecord>,
}

#[derive(Debug, Deserialize)]
struct AppwriteErrorBody {
    #[serde(default)]
    message: String,
}

/// Trend store backed by an Appwrite collection.
///
/// Documents carry `searchTerm`, `count`, `movie_id`, `title` and
/// `poster_url`. Counts are bumped through the attribute increment
/// endpoint so concurrent clients never overwrite each other.
#[derive(Clone)]
pub struct AppwriteTrendStore {
    endpoint: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    api_key: Option<String>,
    client: Client,
}

impl AppwriteTrendStore {
    pub fn new(config: &AppwriteConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            collection_id: config.collection_id.clone(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint,
            urlencoding::encode(&self.database_id),
            urlencoding::encode(&self.collection_id)
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("Content-Type", "application/json");

        match &self.api_key {
            Some(key) => builder.header("X-Appwrite-Key", key),
            None => builder,
        }
    }

    /// Turn non-2xx responses into errors carrying Appwrite's message
    async fn check(response: Response) -> Result<Response, TrendStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AppwriteErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(TrendStoreError::Status { status, message })
    }

    async fn list(&self, queries: Vec<String>) -> Result<Vec<TrendRecord>, TrendStoreError> {
        let params: Vec<(&str, String)> = queries.into_iter().map(|q| ("queries[]", q)).collect();

        let response = self
            .request(Method::GET, &self.documents_url())
            .query(&params)
            .send()
            .await?;
        let text = Self::check(response).await?.text().await?;
        let list: DocumentList = serde_json::from_str(&text)?;

        Ok(list.documents)
    }

    async fn read_document(response: Response) -> Result<TrendRecord, TrendStoreError> {
        let text = Self::check(response).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn equal_query(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

fn order_query(method: &str, attribute: &str) -> String {
    json!({ "method": method, "attribute": attribute }).to_string()
}

fn limit_query(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

#[async_trait]
impl TrendStore for AppwriteTrendStore {
    async fn find(&self, term: &str) -> Result<Option<TrendRecord>, TrendStoreError> {
        let documents = self
            .list(vec![equal_query("searchTerm", term), limit_query(1)])
            .await?;
        Ok(documents.into_iter().next())
    }

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, TrendStoreError> {
        let term = record.search_term.clone();
        let body = json!({
            "documentId": "unique()",
            "data": record,
        });

        let response = self
            .request(Method::POST, &self.documents_url())
            .json(&body)
            .send()
            .await?;

        // A unique index on searchTerm rejects a second document for the term
        if response.status() == StatusCode::CONFLICT {
            tracing::debug!(term = %term, "trend document already exists");
            return Err(TrendStoreError::Duplicate(term));
        }

        Self::read_document(response).await
    }

    async fn increment(&self, record_id: &str) -> Result<TrendRecord, TrendStoreError> {
        let url = format!(
            "{}/{}/count/increment",
            self.documents_url(),
            urlencoding::encode(record_id)
        );

        let response = self
            .request(Method::PATCH, &url)
            .json(&json!({ "value": 1 }))
            .send()
            .await?;

        Self::read_document(response).await
    }

    async fn top(&self, limit: usize) -> Result<Vec<TrendRecord>, TrendStoreError> {
        self.list(vec![
            order_query("orderDesc", "count"),
            order_query("orderAsc", "$createdAt"),
            limit_query(limit),
        ])
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> AppwriteConfig {
        AppwriteConfig {
            endpoint: endpoint.to_string(),
            project_id: "popcine".to_string(),
            database_id: "db".to_string(),
            collection_id: "metrics".to_string(),
            api_key: None,
        }
    }

    #[test]
    fn test_documents_url() {
        let store = AppwriteTrendStore::new(&config("https://cloud.appwrite.io/v1/"));
        assert_eq!(
            store.documents_url(),
            "https://cloud.appwrite.io/v1/databases/db/collections/metrics/documents"
        );
    }

    #[test]
    fn test_query_encoding() {
        let parse = |q: String| serde_json::from_str::<serde_json::Value>(&q).unwrap();

        assert_eq!(
            parse(equal_query("searchTerm", "batman")),
            json!({ "method": "equal", "attribute": "searchTerm", "values": ["batman"] })
        );
        assert_eq!(parse(limit_query(5)), json!({ "method": "limit", "values": [5] }));
        assert_eq!(
            parse(order_query("orderDesc", "count")),
            json!({ "method": "orderDesc", "attribute": "count" })
        );
    }

    #[test]
    fn test_document_deserializes_system_fields() {
        let text = r#"{
            "total": 1,
            "documents": [{
                "$id": "65f0",
                "$createdAt": "2026-01-01T00:00:00.000+00:00",
                "searchTerm": "batman",
                "count": 3,
                "movie_id": 268,
                "poster_url": "https://image.tmdb.org/t/p/w500/batman.jpg"
            }]
        }"#;

        let list: DocumentList = serde_json::from_str(text).unwrap();
        assert_eq!(list.documents.len(), 1);
        let record = &list.documents[0];
        assert_eq!(record.id, "65f0");
        assert_eq!(record.search_term, "batman");
        assert_eq!(record.count, 3);
        assert_eq!(record.title, "");
    }
}
