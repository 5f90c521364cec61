//! Blogs repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::blog::{Blog, CreateBlog, UpdateBlog},
};

#[derive(Clone)]
pub struct BlogsRepository {
    pool: Pool<Postgres>,
}

impl BlogsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all blogs, newest first
    pub async fn list(&self) -> AppResult<Vec<Blog>> {
        let blogs = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, author, categories, tags, image, document,
                   published, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(blogs)
    }

    /// Get blog by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Blog> {
        sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, content, author, categories, tags, image, document,
                   published, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    /// Create a new blog
    pub async fn create(&self, blog: &CreateBlog) -> AppResult<Blog> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO blogs (title, content, author, categories, tags, image, document, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author)
        .bind(&blog.categories)
        .bind(&blog.tags)
        .bind(&blog.image)
        .bind(&blog.document)
        .bind(blog.published)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing blog.
    ///
    /// Fields left as `None` keep their stored values. `image` and `document`
    /// are tri-state (see [`UpdateBlog`]); `Some(None)` writes NULL.
    pub async fn update(&self, id: i32, blog: &UpdateBlog) -> AppResult<Blog> {
        let now = Utc::now();

        // Build dynamic update query
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut param_idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(blog.title, "title");
        add_field!(blog.content, "content");
        add_field!(blog.author, "author");
        add_field!(blog.categories, "categories");
        add_field!(blog.tags, "tags");
        add_field!(blog.published, "published");
        add_field!(blog.image, "image");

        if blog.document.is_some() {
            sets.push(format!("document = ${}", param_idx));
        }

        let query = format!("UPDATE blogs SET {} WHERE id = {}", sets.join(", "), id);

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(blog.title);
        bind_field!(blog.content);
        bind_field!(blog.author);
        bind_field!(blog.categories);
        bind_field!(blog.tags);
        bind_field!(blog.published);
        bind_field!(blog.image);
        bind_field!(blog.document);

        let result = builder.execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a blog
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        Ok(())
    }

    /// Count all blogs
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
