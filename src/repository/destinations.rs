//! Destinations repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::destination::{CreateDestination, Destination, UpdateDestination},
};

#[derive(Clone)]
pub struct DestinationsRepository {
    pool: Pool<Postgres>,
}

impl DestinationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all destinations
    pub async fn list(&self) -> AppResult<Vec<Destination>> {
        let destinations = sqlx::query_as::<_, Destination>(
            r#"
            SELECT id, name, location, region, description, activities,
                   image_url, popularity_rating, created_at
            FROM destinations
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(destinations)
    }

    /// Get destination by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Destination> {
        sqlx::query_as::<_, Destination>(
            r#"
            SELECT id, name, location, region, description, activities,
                   image_url, popularity_rating, created_at
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Destination not found".to_string()))
    }

    /// Create a new destination
    pub async fn create(&self, dest: &CreateDestination) -> AppResult<Destination> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO destinations (name, location, region, description, activities, image_url, popularity_rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&dest.name)
        .bind(&dest.location)
        .bind(&dest.region)
        .bind(&dest.description)
        .bind(&dest.activities)
        .bind(&dest.image_url)
        .bind(dest.popularity_rating.unwrap_or(3))
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing destination; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, dest: &UpdateDestination) -> AppResult<Destination> {
        let result = sqlx::query(
            r#"
            UPDATE destinations SET
                name = COALESCE($1::text, name),
                location = COALESCE($2::text, location),
                region = COALESCE($3::text, region),
                description = COALESCE($4::text, description),
                activities = COALESCE($5::text[], activities),
                image_url = COALESCE($6::text, image_url),
                popularity_rating = COALESCE($7::int, popularity_rating)
            WHERE id = $8
            "#,
        )
        .bind(dest.name.as_deref())
        .bind(dest.location.as_deref())
        .bind(dest.region.as_deref())
        .bind(dest.description.as_deref())
        .bind(dest.activities.as_deref())
        .bind(dest.image_url.as_deref())
        .bind(dest.popularity_rating)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a destination
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        Ok(())
    }

    /// Count all destinations
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
