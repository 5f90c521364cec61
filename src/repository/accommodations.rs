//! Accommodations repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::accommodation::{Accommodation, CreateAccommodation, UpdateAccommodation},
};

#[derive(Clone)]
pub struct AccommodationsRepository {
    pool: Pool<Postgres>,
}

impl AccommodationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all accommodations
    pub async fn list(&self) -> AppResult<Vec<Accommodation>> {
        let accommodations = sqlx::query_as::<_, Accommodation>(
            r#"
            SELECT id, name, location, kind, description, price_per_night,
                   amenities, available, image_url, images, created_at
            FROM accommodations
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accommodations)
    }

    /// Get accommodation by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Accommodation> {
        sqlx::query_as::<_, Accommodation>(
            r#"
            SELECT id, name, location, kind, description, price_per_night,
                   amenities, available, image_url, images, created_at
            FROM accommodations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Accommodation not found".to_string()))
    }

    /// Create a new accommodation
    pub async fn create(&self, acc: &CreateAccommodation) -> AppResult<Accommodation> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO accommodations
                (name, location, kind, description, price_per_night, amenities, available, image_url, images)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&acc.name)
        .bind(&acc.location)
        .bind(&acc.kind)
        .bind(&acc.description)
        .bind(acc.price_per_night)
        .bind(&acc.amenities)
        .bind(acc.available.unwrap_or(true))
        .bind(&acc.image_url)
        .bind(&acc.images)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing accommodation; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, acc: &UpdateAccommodation) -> AppResult<Accommodation> {
        let result = sqlx::query(
            r#"
            UPDATE accommodations SET
                name = COALESCE($1::text, name),
                location = COALESCE($2::text, location),
                kind = COALESCE($3::text, kind),
                description = COALESCE($4::text, description),
                price_per_night = COALESCE($5::float8, price_per_night),
                amenities = COALESCE($6::text[], amenities),
                available = COALESCE($7::boolean, available),
                image_url = COALESCE($8::text, image_url),
                images = COALESCE($9::text[], images)
            WHERE id = $10
            "#,
        )
        .bind(acc.name.as_deref())
        .bind(acc.location.as_deref())
        .bind(acc.kind.as_deref())
        .bind(acc.description.as_deref())
        .bind(acc.price_per_night)
        .bind(acc.amenities.as_deref())
        .bind(acc.available)
        .bind(acc.image_url.as_deref())
        .bind(acc.images.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Accommodation not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete an accommodation
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM accommodations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Accommodation not found".to_string()));
        }

        Ok(())
    }

    /// Count all accommodations
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accommodations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
