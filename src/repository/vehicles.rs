//! Vehicles repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle},
};

#[derive(Clone)]
pub struct VehiclesRepository {
    pool: Pool<Postgres>,
}

impl VehiclesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all vehicles
    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, kind, description, capacity, price_per_day,
                   available, image_url, images, features, created_at
            FROM vehicles
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Get vehicle by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, kind, description, capacity, price_per_day,
                   available, image_url, images, features, created_at
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    /// Create a new vehicle
    pub async fn create(&self, vehicle: &CreateVehicle) -> AppResult<Vehicle> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO vehicles
                (name, kind, description, capacity, price_per_day, available, image_url, images, features)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.kind)
        .bind(&vehicle.description)
        .bind(vehicle.capacity)
        .bind(vehicle.price_per_day)
        .bind(vehicle.available.unwrap_or(true))
        .bind(&vehicle.image_url)
        .bind(&vehicle.images)
        .bind(&vehicle.features)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing vehicle; fields left as `None` keep their stored values
    pub async fn update(&self, id: i32, vehicle: &UpdateVehicle) -> AppResult<Vehicle> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles SET
                name = COALESCE($1::text, name),
                kind = COALESCE($2::text, kind),
                description = COALESCE($3::text, description),
                capacity = COALESCE($4::int, capacity),
                price_per_day = COALESCE($5::float8, price_per_day),
                available = COALESCE($6::boolean, available),
                image_url = COALESCE($7::text, image_url),
                images = COALESCE($8::text[], images),
                features = COALESCE($9::text[], features)
            WHERE id = $10
            "#,
        )
        .bind(vehicle.name.as_deref())
        .bind(vehicle.kind.as_deref())
        .bind(vehicle.description.as_deref())
        .bind(vehicle.capacity)
        .bind(vehicle.price_per_day)
        .bind(vehicle.available)
        .bind(vehicle.image_url.as_deref())
        .bind(vehicle.images.as_deref())
        .bind(vehicle.features.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a vehicle
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }

    /// Count all vehicles
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
