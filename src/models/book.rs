//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const RATING_RANGE_MESSAGE: &str = "Rating must be between 1 and 5";

/// Book record, one row of the `library` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub book_title: String,
    pub book_genre: String,
    pub published_year: i64,
    /// Rating from 1 to 5
    pub rating: i64,
}

/// Create/update request body as received on the wire.
///
/// Every field is optional here so that a missing field turns into a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

/// Validated book fields, ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub book_title: String,
    #[validate(length(min = 1, message = "All fields are required"))]
    pub book_genre: String,
    pub published_year: i64,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
}

fn present_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn present_number(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

impl TryFrom<BookPayload> for NewBook {
    type Error = AppError;

    /// Missing, empty and zero values all count as absent
    fn try_from(payload: BookPayload) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation(MISSING_FIELDS_MESSAGE.to_string());

        let book = NewBook {
            book_title: present_text(payload.book_title).ok_or_else(missing)?,
            book_genre: present_text(payload.book_genre).ok_or_else(missing)?,
            published_year: present_number(payload.published_year).ok_or_else(missing)?,
            rating: present_number(payload.rating).ok_or_else(missing)?,
        };
        book.validate()?;
        Ok(book)
    }
}

/// Response carrying a human readable message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

/// Response to a successful create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    /// Identifier assigned by storage
    pub id: i64,
}
