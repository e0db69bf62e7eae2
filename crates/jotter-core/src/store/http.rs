//! Remote document store reached over a small REST API.
//!
//! Layout under `base_url`:
//! - `/notes` and `/notes/{id}`: live collection (`GET`, `PUT`, `DELETE`)
//! - `/notes:batch`: batched upsert (`POST`)
//! - `/deletes` and `/deletes/{id}`: tombstone collection
//! - `/deletes:batch`: batched tombstone insert (`POST`)

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{ensure_batch_limit, RemoteStore};
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};
use crate::util::{compact_text, is_http_url, normalize_text_option};

const NOTES_COLLECTION: &str = "notes";
const DELETES_COLLECTION: &str = "deletes";

#[derive(Clone)]
pub struct HttpRemoteStore {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for HttpRemoteStore {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HttpRemoteStore")
            .field("base_url", &self.base_url)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl HttpRemoteStore {
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.into())?,
            auth_token: normalize_text_option(auth_token),
            client: reqwest::Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }

    fn document_url(&self, collection: &str, id: &NoteId) -> String {
        let encoded_id = urlencoding::encode(id.as_str());
        format!("{}/{collection}/{encoded_id}", self.base_url)
    }

    fn batch_url(&self, collection: &str) -> String {
        format!("{}/{collection}:batch", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(reqwest::header::ACCEPT, "application/json");
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api(parse_api_error(status, &body)))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Note>> {
        let response = self
            .send(self.client.get(self.collection_url(collection)))
            .await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    async fn put(&self, collection: &str, note: &Note) -> Result<()> {
        self.send(
            self.client
                .put(self.document_url(collection, &note.id))
                .json(note),
        )
        .await?;
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &NoteId) -> Result<()> {
        let request = self.client.delete(self.document_url(collection, id));
        let response = self.authorize(request).send().await?;
        // Deleting something already gone is not an error
        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api(parse_api_error(status, &body)))
    }

    async fn post_batch(&self, collection: &str, notes: &[Note]) -> Result<()> {
        ensure_batch_limit(notes.len())?;
        self.send(self.client.post(self.batch_url(collection)).json(notes))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn upsert(&self, note: &Note) -> Result<()> {
        self.put(NOTES_COLLECTION, note).await
    }

    async fn upsert_many(&self, notes: &[Note]) -> Result<()> {
        self.post_batch(NOTES_COLLECTION, notes).await
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.remove(NOTES_COLLECTION, id).await
    }

    async fn insert_tombstone(&self, note: &Note) -> Result<()> {
        self.put(DELETES_COLLECTION, note).await
    }

    async fn insert_tombstones(&self, notes: &[Note]) -> Result<()> {
        self.post_batch(DELETES_COLLECTION, notes).await
    }

    async fn delete_tombstone(&self, note: &Note) -> Result<()> {
        self.remove(DELETES_COLLECTION, &note.id).await
    }

    async fn get_live(&self) -> Result<Vec<Note>> {
        self.list(NOTES_COLLECTION).await
    }

    async fn get_tombstones(&self) -> Result<Vec<Note>> {
        self.list(DELETES_COLLECTION).await
    }

    async fn find(&self, note: &Note) -> Result<Option<Note>> {
        let request = self
            .client
            .get(self.document_url(NOTES_COLLECTION, &note.id));
        let response = self.authorize(request).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(parse_api_error(status, &body)));
        }
        Ok(Some(response.json::<Note>().await?))
    }

    async fn delete_all(&self) -> Result<()> {
        self.send(self.client.delete(self.collection_url(NOTES_COLLECTION)))
            .await?;
        self.send(self.client.delete(self.collection_url(DELETES_COLLECTION)))
            .await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let base_url = normalize_text_option(Some(raw))
        .ok_or_else(|| Error::Config("remote base URL must not be empty".to_string()))?;
    if is_http_url(&base_url) {
        Ok(base_url.trim_end_matches('/').to_string())
    } else {
        Err(Error::Config(
            "remote base URL must include http:// or https://".to_string(),
        ))
    }
}
