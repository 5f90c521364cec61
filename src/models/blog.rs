//! Blog post model.
//!
//! Blogs are the only entity created and updated through multipart forms:
//! the `image` and `document` attributes hold relative upload paths managed
//! by the upload service, and the input types here are assembled by the
//! multipart parser rather than deserialized from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full blog model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// Relative upload path under /uploads/images, if an image is attached
    pub image: Option<String>,
    /// Relative upload path under /uploads/documents, if a PDF is attached
    pub document: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create blog input, built from the multipart form
#[derive(Debug, Default, Validate, ToSchema)]
pub struct CreateBlog {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub image: Option<String>,
    pub document: Option<String>,
}

/// Update blog input, built from the multipart form.
///
/// `image` and `document` are tri-state: `None` leaves the stored path
/// untouched, `Some(None)` clears it, `Some(Some(path))` replaces it.
#[derive(Debug, Default)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub image: Option<Option<String>>,
    pub document: Option<Option<String>>,
}
