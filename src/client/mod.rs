//! HTTP client for the Bookstore API and the terminal pages built on it

pub mod pages;
pub mod progress;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::book::{Book, BookList, BookPayload, MessageResponse};

/// Address the client talks to unless told otherwise
pub const DEFAULT_BASE_URL: &str = "http://localhost:5555";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
}

/// Thin wrapper over the `/books` resource
#[derive(Clone)]
pub struct BooksClient {
    http: Client,
    base_url: String,
}

impl BooksClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base_url, id)
    }

    pub async fn list(&self) -> Result<BookList, ClientError> {
        let response = self.http.get(self.books_url()).send().await?;
        decode(response).await
    }

    pub async fn get(&self, id: &str) -> Result<Book, ClientError> {
        let response = self.http.get(self.book_url(id)).send().await?;
        decode(response).await
    }

    pub async fn create(&self, payload: &BookPayload) -> Result<Book, ClientError> {
        let response = self.http.post(self.books_url()).json(payload).send().await?;
        decode(response).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: &BookPayload,
    ) -> Result<MessageResponse, ClientError> {
        let response = self.http.put(self.book_url(id)).json(payload).send().await?;
        decode(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let response = self.http.delete(self.book_url(id)).send().await?;
        decode(response).await
    }
}

/// Any non-2xx status becomes `ClientError::Status` carrying the server message
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
