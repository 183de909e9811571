use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Wire format of `date_added`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A row of the `reviews` table as stored by SQLite.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ReviewRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub rating: i64,
    pub review_text: String,
    pub date_added: NaiveDateTime,
}

/// A review as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub rating: i64,
    pub review_text: String,
    pub date_added: String,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            rating: row.rating,
            review_text: row.review_text,
            date_added: row.date_added.format(DATE_FORMAT).to_string(),
        }
    }
}

/// The client-settable fields of a review, all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFields {
    pub title: String,
    pub author: String,
    pub rating: i64,
    pub review_text: String,
}

/// Body of `POST /reviews` and `PUT /reviews/{id}`.
///
/// Every field is optional at the serde level so that absent (or `null`)
/// fields can be reported together by name instead of failing on the first.
/// Type mismatches are still rejected during deserialization.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub rating: Option<i64>,
    pub review_text: Option<String>,
}

impl ReviewRequest {
    pub fn validate(self) -> AppResult<ReviewFields> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.author.is_none() {
            missing.push("author");
        }
        if self.rating.is_none() {
            missing.push("rating");
        }
        if self.review_text.is_none() {
            missing.push("review_text");
        }

        match (self.title, self.author, self.rating, self.review_text) {
            (Some(title), Some(author), Some(rating), Some(review_text)) => Ok(ReviewFields {
                title,
                author,
                rating,
                review_text,
            }),
            _ => Err(AppError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
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
