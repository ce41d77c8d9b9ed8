//! HTTP client for the `/library` endpoints

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::book::{Book, BookPayload, CreatedResponse, MessageResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct LibraryClient {
    http: Client,
    base_url: String,
}

impl LibraryClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/library", self.base_url)
    }

    fn book_url(&self, id: i64) -> String {
        format!("{}/library/{}", self.base_url, id)
    }

    pub async fn list(&self) -> ClientResult<Vec<Book>> {
        let response = self.http.get(self.collection_url()).send().await?;
        decode(response).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Book> {
        let response = self.http.get(self.book_url(id)).send().await?;
        decode(response).await
    }

    pub async fn create(&self, payload: &BookPayload) -> ClientResult<CreatedResponse> {
        let response = self
            .http
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: i64, payload: &BookPayload) -> ClientResult<MessageResponse> {
        let response = self.http.put(self.book_url(id)).json(payload).send().await?;
        decode(response).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        let response = self.http.delete(self.book_url(id)).send().await?;
        decode(response).await
    }
}

/// Turn a non-2xx answer into [`ClientError::Status`], otherwise parse the body
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    let message = body
        .get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error"))
        .to_string();

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
