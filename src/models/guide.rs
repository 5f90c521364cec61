//! Travel guide article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full guide model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub details: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Create guide request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGuide {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Details are required"))]
    pub details: String,
    pub available: Option<bool>,
}

/// Update guide request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateGuide {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub available: Option<bool>,
}
