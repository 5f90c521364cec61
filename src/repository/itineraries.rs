//! Itineraries repository for database operations.
//!
//! The day-by-day plan is stored as JSONB; destination references are a plain
//! int array with no foreign key, so dangling ids survive destination deletes.

use sqlx::{types::Json, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::itinerary::{CreateItinerary, Itinerary, UpdateItinerary},
};

#[derive(Clone)]
pub struct ItinerariesRepository {
    pool: Pool<Postgres>,
}

impl ItinerariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all itineraries
    pub async fn list(&self) -> AppResult<Vec<Itinerary>> {
        let itineraries = sqlx::query_as::<_, Itinerary>(
            r#"
            SELECT id, title, days, description, highlights, price, featured,
                   day_by_day, inclusions, exclusions, destinations, created_at
            FROM itineraries
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(itineraries)
    }

    /// Get itinerary by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Itinerary> {
        sqlx::query_as::<_, Itinerary>(
            r#"
            SELECT id, title, days, description, highlights, price, featured,
                   day_by_day, inclusions, exclusions, destinations, created_at
            FROM itineraries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Itinerary not found".to_string()))
    }

    /// Create a new itinerary
    pub async fn create(&self, itinerary: &CreateItinerary) -> AppResult<Itinerary> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO itineraries
                (title, days, description, highlights, price, featured,
                 day_by_day, inclusions, exclusions, destinations)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&itinerary.title)
        .bind(itinerary.days)
        .bind(&itinerary.description)
        .bind(&itinerary.highlights)
        .bind(itinerary.price)
        .bind(itinerary.featured.unwrap_or(false))
        .bind(Json(&itinerary.day_by_day))
        .bind(&itinerary.inclusions)
        .bind(&itinerary.exclusions)
        .bind(&itinerary.destinations)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing itinerary; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, itinerary: &UpdateItinerary) -> AppResult<Itinerary> {
        let result = sqlx::query(
            r#"
            UPDATE itineraries SET
                title = COALESCE($1::text, title),
                days = COALESCE($2::int, days),
                description = COALESCE($3::text, description),
                highlights = COALESCE($4::text[], highlights),
                price = COALESCE($5::float8, price),
                featured = COALESCE($6::boolean, featured),
                day_by_day = COALESCE($7::jsonb, day_by_day),
                inclusions = COALESCE($8::text[], inclusions),
                exclusions = COALESCE($9::text[], exclusions),
                destinations = COALESCE($10::int[], destinations)
            WHERE id = $11
            "#,
        )
        .bind(itinerary.title.as_deref())
        .bind(itinerary.days)
        .bind(itinerary.description.as_deref())
        .bind(itinerary.highlights.as_deref())
        .bind(itinerary.price)
        .bind(itinerary.featured)
        .bind(itinerary.day_by_day.as_ref().map(Json))
        .bind(itinerary.inclusions.as_deref())
        .bind(itinerary.exclusions.as_deref())
        .bind(itinerary.destinations.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Itinerary not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete an itinerary
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Itinerary not found".to_string()));
        }

        Ok(())
    }

    /// Count all itineraries
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM itineraries")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
