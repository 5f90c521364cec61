//! Accommodation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full accommodation model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: i32,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    pub amenities: Vec<String>,
    pub available: bool,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Create accommodation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAccommodation {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub available: Option<bool>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Update accommodation request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAccommodation {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub available: Option<bool>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
}
