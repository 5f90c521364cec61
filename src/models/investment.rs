//! Investment listing model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Listing status for an investment property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InvestmentStatus {
    Available,
    #[serde(rename = "Under Offer")]
    UnderOffer,
    Sold,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Available => "Available",
            InvestmentStatus::UnderOffer => "Under Offer",
            InvestmentStatus::Sold => "Sold",
        }
    }
}

impl std::fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InvestmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(InvestmentStatus::Available),
            "Under Offer" => Ok(InvestmentStatus::UnderOffer),
            "Sold" => Ok(InvestmentStatus::Sold),
            _ => Err(format!("Invalid investment status: {}", s)),
        }
    }
}

// SQLx conversion for InvestmentStatus (stored as text)
impl sqlx::Type<Postgres> for InvestmentStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for InvestmentStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for InvestmentStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Full investment model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Projected return, free text (e.g. "8-10% p.a.")
    pub roi: Option<String>,
    pub image_url: Option<String>,
    pub status: InvestmentStatus,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Create investment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateInvestment {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub roi: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<InvestmentStatus>,
    pub featured: Option<bool>,
}

/// Update investment request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateInvestment {
    pub title: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub roi: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<InvestmentStatus>,
    pub featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for s in [
            InvestmentStatus::Available,
            InvestmentStatus::UnderOffer,
            InvestmentStatus::Sold,
        ] {
            assert_eq!(s.as_str().parse::<InvestmentStatus>().unwrap(), s);
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert!("Pending".parse::<InvestmentStatus>().is_err());
        assert!(serde_json::from_str::<InvestmentStatus>("\"Pending\"").is_err());
    }

    #[test]
    fn status_serializes_with_space() {
        let json = serde_json::to_string(&InvestmentStatus::UnderOffer).unwrap();
        assert_eq!(json, "\"Under Offer\"");
    }
}
