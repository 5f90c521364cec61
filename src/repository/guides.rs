//! Guides repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::guide::{CreateGuide, Guide, UpdateGuide},
};

#[derive(Clone)]
pub struct GuidesRepository {
    pool: Pool<Postgres>,
}

impl GuidesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all guides
    pub async fn list(&self) -> AppResult<Vec<Guide>> {
        let guides = sqlx::query_as::<_, Guide>(
            "SELECT id, title, description, details, available, created_at FROM guides",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(guides)
    }

    /// Get guide by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Guide> {
        sqlx::query_as::<_, Guide>(
            "SELECT id, title, description, details, available, created_at FROM guides WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Guide not found".to_string()))
    }

    /// Create a new guide
    pub async fn create(&self, guide: &CreateGuide) -> AppResult<Guide> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO guides (title, description, details, available)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&guide.title)
        .bind(&guide.description)
        .bind(&guide.details)
        .bind(guide.available.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing guide; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, guide: &UpdateGuide) -> AppResult<Guide> {
        let result = sqlx::query(
            r#"
            UPDATE guides SET
                title = COALESCE($1::text, title),
                description = COALESCE($2::text, description),
                details = COALESCE($3::text, details),
                available = COALESCE($4::boolean, available)
            WHERE id = $5
            "#,
        )
        .bind(guide.title.as_deref())
        .bind(guide.description.as_deref())
        .bind(guide.details.as_deref())
        .bind(guide.available)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guide not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a guide
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM guides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guide not found".to_string()));
        }

        Ok(())
    }

    /// Count all guides
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guides")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
