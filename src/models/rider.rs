//! Rider (driver/chauffeur) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Kind of vehicle a rider operates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiderType {
    #[serde(rename = "Motorbike Rider")]
    Motorbike,
    #[serde(rename = "Tuk Tuk Rider")]
    TukTuk,
    #[serde(rename = "Car Rider")]
    Car,
    #[serde(rename = "Mini Coach & Bus Rider")]
    MiniCoachBus,
}

impl RiderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiderType::Motorbike => "Motorbike Rider",
            RiderType::TukTuk => "Tuk Tuk Rider",
            RiderType::Car => "Car Rider",
            RiderType::MiniCoachBus => "Mini Coach & Bus Rider",
        }
    }
}

impl std::fmt::Display for RiderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Motorbike Rider" => Ok(RiderType::Motorbike),
            "Tuk Tuk Rider" => Ok(RiderType::TukTuk),
            "Car Rider" => Ok(RiderType::Car),
            "Mini Coach & Bus Rider" => Ok(RiderType::MiniCoachBus),
            _ => Err(format!("Invalid rider type: {}", s)),
        }
    }
}

// SQLx conversion for RiderType (stored as text)
impl sqlx::Type<Postgres> for RiderType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for RiderType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for RiderType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Full rider model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RiderType,
    pub description: Option<String>,
    /// Years of experience
    pub experience: i32,
    pub languages: Vec<String>,
    pub available: bool,
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Create rider request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRider {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RiderType,
    pub description: Option<String>,
    pub experience: Option<i32>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub available: Option<bool>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Update rider request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRider {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<RiderType>,
    pub description: Option<String>,
    pub experience: Option<i32>,
    pub languages: Option<Vec<String>>,
    pub available: Option<bool>,
    pub specialties: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_round_trip() {
        for t in [
            RiderType::Motorbike,
            RiderType::TukTuk,
            RiderType::Car,
            RiderType::MiniCoachBus,
        ] {
            assert_eq!(t.as_str().parse::<RiderType>().unwrap(), t);
        }
    }

    #[test]
    fn type_rejects_unknown_value() {
        assert!("Bicycle Rider".parse::<RiderType>().is_err());
        assert!(serde_json::from_str::<RiderType>("\"Bicycle Rider\"").is_err());
    }
}
