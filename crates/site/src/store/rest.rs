//! JSON/REST client for the managed record store.
//!
//! # Endpoints
//!
//! ```text
//! POST   {base}/collections/{coll}/documents        create, returns {"id"}
//! POST   {base}/collections/{coll}/query            ordered filtered read
//! PUT    {base}/collections/{coll}/documents/{id}   write at a chosen ID
//! PATCH  {base}/collections/{coll}/documents/{id}   partial field merge
//! DELETE {base}/collections/{coll}/documents/{id}
//! GET    {base}/collections/{coll}/documents/{id}
//! ```
//!
//! The store stamps `createdAt` on every created document; the client never
//! sends a timestamp. Authentication is a bearer API key on every request.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::config::StoreConfig;

use super::{Document, FieldEquals, StoreError};

/// Production record store client.
#[derive(Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    #[serde(rename = "orderBy")]
    order_by: &'a [&'a str],
    #[serde(rename = "where")]
    filters: &'a [FieldEquals],
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Vec<Document>,
}

/// Error body shape returned by the store on rejections.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl StoreClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] if the API key cannot be encoded
    /// into a request header.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .map_err(|e| StoreError::Rejected(format!("invalid store API key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    #[instrument(skip(self, fields))]
    pub(super) async fn create(
        &self,
        collection: &str,
        fields: &Value,
    ) -> Result<String, StoreError> {
        let url = format!("{}/collections/{collection}/documents", self.base_url);
        let response = self.client.post(url).json(fields).send().await?;
        let body: CreateResponse = Self::check(response).await?.json().await?;
        Ok(body.id)
    }

    #[instrument(skip(self, filters))]
    pub(super) async fn query(
        &self,
        collection: &str,
        order_by: &[&str],
        filters: &[FieldEquals],
    ) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}/collections/{collection}/query", self.base_url);
        let request = QueryRequest { order_by, filters };
        let response = self.client.post(url).json(&request).send().await?;
        let body: QueryResponse = Self::check(response).await?.json().await?;
        Ok(body.documents)
    }

    #[instrument(skip(self, fields))]
    pub(super) async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<(), StoreError> {
        let url = format!("{}/collections/{collection}/documents/{id}", self.base_url);
        let response = self.client.put(url).json(fields).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    #[instrument(skip(self, fields))]
    pub(super) async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<(), StoreError> {
        let url = format!("{}/collections/{collection}/documents/{id}", self.base_url);
        let response = self.client.patch(url).json(fields).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub(super) async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = format!("{}/collections/{collection}/documents/{id}", self.base_url);
        let response = self.client.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub(super) async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let url = format!("{}/collections/{collection}/documents/{id}", self.base_url);
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: Document = Self::check(response).await?.json().await?;
        Ok(Some(document))
    }

    /// Map non-success responses to [`StoreError`], extracting the store's
    /// error message so it can be surfaced verbatim.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = Self::error_message(response).await;
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(StoreError::Unauthorized(message))
            }
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(message)),
            _ => Err(StoreError::Rejected(message)),
        }
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("store returned {status}"),
        }
    }
}
