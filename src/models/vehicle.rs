//! Vehicle model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full vehicle model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_day: Option<f64>,
    pub available: bool,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Create vehicle request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateVehicle {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_day: Option<f64>,
    pub available: Option<bool>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Update vehicle request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateVehicle {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_day: Option<f64>,
    pub available: Option<bool>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
}
