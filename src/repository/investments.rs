//! Investments repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::investment::{CreateInvestment, Investment, InvestmentStatus, UpdateInvestment},
};

#[derive(Clone)]
pub struct InvestmentsRepository {
    pool: Pool<Postgres>,
}

impl InvestmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all investments
    pub async fn list(&self) -> AppResult<Vec<Investment>> {
        let investments = sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, title, category, location, description, price, roi,
                   image_url, status, featured, created_at
            FROM investments
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(investments)
    }

    /// Get investment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Investment> {
        sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, title, category, location, description, price, roi,
                   image_url, status, featured, created_at
            FROM investments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Investment not found".to_string()))
    }

    /// Create a new investment
    pub async fn create(&self, investment: &CreateInvestment) -> AppResult<Investment> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO investments
                (title, category, location, description, price, roi, image_url, status, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&investment.title)
        .bind(&investment.category)
        .bind(&investment.location)
        .bind(&investment.description)
        .bind(investment.price)
        .bind(&investment.roi)
        .bind(&investment.image_url)
        .bind(investment.status.unwrap_or(InvestmentStatus::Available))
        .bind(investment.featured.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing investment; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, investment: &UpdateInvestment) -> AppResult<Investment> {
        let result = sqlx::query(
            r#"
            UPDATE investments SET
                title = COALESCE($1::text, title),
                category = COALESCE($2::text, category),
                location = COALESCE($3::text, location),
                description = COALESCE($4::text, description),
                price = COALESCE($5::float8, price),
                roi = COALESCE($6::text, roi),
                image_url = COALESCE($7::text, image_url),
                status = COALESCE($8::text, status),
                featured = COALESCE($9::boolean, featured)
            WHERE id = $10
            "#,
        )
        .bind(investment.title.as_deref())
        .bind(investment.category.as_deref())
        .bind(investment.location.as_deref())
        .bind(investment.description.as_deref())
        .bind(investment.price)
        .bind(investment.roi.as_deref())
        .bind(investment.image_url.as_deref())
        .bind(investment.status)
        .bind(investment.featured)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Investment not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete an investment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM investments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Investment not found".to_string()));
        }

        Ok(())
    }

    /// Count all investments
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM investments")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
