//! Riders repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::rider::{CreateRider, Rider, UpdateRider},
};

#[derive(Clone)]
pub struct RidersRepository {
    pool: Pool<Postgres>,
}

impl RidersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all riders
    pub async fn list(&self) -> AppResult<Vec<Rider>> {
        let riders = sqlx::query_as::<_, Rider>(
            r#"
            SELECT id, name, kind, description, experience, languages,
                   available, specialties, created_at
            FROM riders
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(riders)
    }

    /// Get rider by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Rider> {
        sqlx::query_as::<_, Rider>(
            r#"
            SELECT id, name, kind, description, experience, languages,
                   available, specialties, created_at
            FROM riders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Rider not found".to_string()))
    }

    /// Create a new rider
    pub async fn create(&self, rider: &CreateRider) -> AppResult<Rider> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO riders
                (name, kind, description, experience, languages, available, specialties)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&rider.name)
        .bind(rider.kind)
        .bind(&rider.description)
        .bind(rider.experience.unwrap_or(1))
        .bind(&rider.languages)
        .bind(rider.available.unwrap_or(true))
        .bind(&rider.specialties)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing rider; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, rider: &UpdateRider) -> AppResult<Rider> {
        let result = sqlx::query(
            r#"
            UPDATE riders SET
                name = COALESCE($1::text, name),
                kind = COALESCE($2::text, kind),
                description = COALESCE($3::text, description),
                experience = COALESCE($4::int, experience),
                languages = COALESCE($5::text[], languages),
                available = COALESCE($6::boolean, available),
                specialties = COALESCE($7::text[], specialties)
            WHERE id = $8
            "#,
        )
        .bind(rider.name.as_deref())
        .bind(rider.kind)
        .bind(rider.description.as_deref())
        .bind(rider.experience)
        .bind(rider.languages.as_deref())
        .bind(rider.available)
        .bind(rider.specialties.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rider not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a rider
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM riders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rider not found".to_string()));
        }

        Ok(())
    }

    /// Count all riders
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM riders")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
