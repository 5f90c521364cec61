//! Itinerary model and day-by-day sub-documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use validator::Validate;

/// One entry of an itinerary's day-by-day plan (stored as JSONB)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDay {
    pub day: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Full itinerary model (DB + API).
///
/// `destinations` holds soft references to destination ids; existence is not
/// enforced and dangling ids are returned as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: i32,
    pub title: String,
    pub days: i32,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub price: Option<f64>,
    pub featured: bool,
    #[schema(value_type = Vec<ItineraryDay>)]
    pub day_by_day: Json<Vec<ItineraryDay>>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub destinations: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

/// Create itinerary request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateItinerary {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(range(min = 1, message = "Days must be at least 1"))]
    pub days: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub price: Option<f64>,
    pub featured: Option<bool>,
    #[serde(default)]
    pub day_by_day: Vec<ItineraryDay>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub destinations: Vec<i32>,
}

/// Update itinerary request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateItinerary {
    pub title: Option<String>,
    pub days: Option<i32>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub price: Option<f64>,
    pub featured: Option<bool>,
    pub day_by_day: Option<Vec<ItineraryDay>>,
    pub inclusions: Option<Vec<String>>,
    pub exclusions: Option<Vec<String>>,
    pub destinations: Option<Vec<i32>>,
}
