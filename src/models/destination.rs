//! Destination model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full destination model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub region: String,
    pub description: Option<String>,
    pub activities: Vec<String>,
    pub image_url: Option<String>,
    /// 1 (hidden gem) to 5 (must-see)
    pub popularity_rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Create destination request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDestination {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    pub description: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Popularity rating must be between 1 and 5"))]
    pub popularity_rating: Option<i32>,
}

/// Update destination request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDestination {
    pub name: Option<String>,
    pub location: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub activities: Option<Vec<String>>,
    pub image_url: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Popularity rating must be between 1 and 5"))]
    pub popularity_rating: Option<i32>,
}
