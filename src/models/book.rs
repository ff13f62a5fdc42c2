//! Book model

use std::{borrow::Cow, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Message returned whenever a book body misses (or empties) one of its fields
pub const REQUIRED_FIELDS_MESSAGE: &str = "Send all required fields: title, author, publishYear";

/// Book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier assigned by the store on creation
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book identifier taken from a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for BookId {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| AppError::Validation(format!("Invalid book id: {}", raw)))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&Book> for BookId {
    fn from(book: &Book) -> Self {
        Self(book.id)
    }
}

/// Create / update book request body.
///
/// Every field is optional at the wire level so that a missing field turns into
/// a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[validate(
        required(message = "Send all required fields: title, author, publishYear"),
        length(min = 1, message = "Send all required fields: title, author, publishYear")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Send all required fields: title, author, publishYear"),
        length(min = 1, message = "Send all required fields: title, author, publishYear")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "Send all required fields: title, author, publishYear"),
        custom(function = "validate_publish_year")
    )]
    pub publish_year: Option<i32>,
}

/// A year of 0 counts as missing; any other year, negative included, is accepted
fn validate_publish_year(year: i32) -> Result<(), ValidationError> {
    if year == 0 {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed(REQUIRED_FIELDS_MESSAGE));
        return Err(err);
    }
    Ok(())
}

impl BookPayload {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publish_year: i32) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            publish_year: Some(publish_year),
        }
    }
}

/// Book fields handed to the store, taken from an already validated payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publish_year: i32,
}

impl TryFrom<BookPayload> for NewBook {
    type Error = AppError;

    fn try_from(payload: BookPayload) -> Result<Self, Self::Error> {
        match (payload.title, payload.author, payload.publish_year) {
            (Some(title), Some(author), Some(publish_year)) => Ok(Self {
                title,
                author,
                publish_year,
            }),
            _ => Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// List response: every book plus the count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookList {
    pub count: usize,
    pub data: Vec<Book>,
}

impl From<Vec<Book>> for BookList {
    fn from(data: Vec<Book>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Confirmation body with only a human readable status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
