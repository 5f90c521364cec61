//! Blog endpoints.
//!
//! Unlike the other content types, blogs are created and updated through
//! `multipart/form-data`: text fields arrive alongside optional `image` and
//! `document` file parts. Array fields use repeated keys, booleans must be
//! the literal strings `"true"` or `"false"`, and the update form supports
//! `keepExistingImage` / `keepExistingDocument` flags. Replaced or cleared
//! attachments are deleted from disk after the database write succeeds.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::multipart::{Field, Multipart};

use crate::{
    error::{AppError, AppResult},
    models::blog::{Blog, CreateBlog, UpdateBlog},
    services::uploads::{UploadKind, BLOG_ATTACHMENT_LIMIT},
    AppState,
};

use super::{check, AuthenticatedUser, MessageResponse};

async fn field_text(field: Field) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))
}

/// Parse a boolean form value; only the literal strings are accepted
fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::Validation(format!(
            "{} must be \"true\" or \"false\"",
            name
        ))),
    }
}

async fn store_attachment(
    state: &AppState,
    kind: UploadKind,
    name: &str,
    field: Field,
) -> AppResult<String> {
    let original = field.file_name().unwrap_or("upload").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))?;

    state
        .services
        .uploads
        .store(kind, name, &original, &content_type, &bytes, BLOG_ATTACHMENT_LIMIT)
        .await
}

/// Remove files stored during a request whose processing later failed
async fn discard_new_files(state: &AppState, image: Option<&str>, document: Option<&str>) {
    if let Some(path) = image {
        state.services.uploads.remove(path).await;
    }
    if let Some(path) = document {
        state.services.uploads.remove(path).await;
    }
}

async fn fill_create_form(
    state: &AppState,
    multipart: &mut Multipart,
    input: &mut CreateBlog,
) -> AppResult<()> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => input.title = field_text(field).await?,
            "content" => input.content = field_text(field).await?,
            "author" => input.author = field_text(field).await?,
            "categories" => input.categories.push(field_text(field).await?),
            "tags" => input.tags.push(field_text(field).await?),
            "published" => input.published = parse_flag("published", &field_text(field).await?)?,
            "image" => {
                input.image =
                    Some(store_attachment(state, UploadKind::Image, "image", field).await?)
            }
            "document" => {
                input.document =
                    Some(store_attachment(state, UploadKind::Document, "document", field).await?)
            }
            other => {
                return Err(AppError::Validation(format!("Unexpected field: {}", other)));
            }
        }
    }

    Ok(())
}

/// Intermediate state for the update form before the tri-state file
/// columns are resolved
#[derive(Default)]
struct UpdateForm {
    fields: UpdateBlog,
    keep_existing_image: bool,
    keep_existing_document: bool,
    new_image: Option<String>,
    new_document: Option<String>,
}

async fn fill_update_form(
    state: &AppState,
    multipart: &mut Multipart,
    form: &mut UpdateForm,
) -> AppResult<()> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.fields.title = Some(field_text(field).await?),
            "content" => form.fields.content = Some(field_text(field).await?),
            "author" => form.fields.author = Some(field_text(field).await?),
            "categories" => form
                .fields
                .categories
                .get_or_insert_with(Vec::new)
                .push(field_text(field).await?),
            "tags" => form
                .fields
                .tags
                .get_or_insert_with(Vec::new)
                .push(field_text(field).await?),
            "published" => {
                form.fields.published =
                    Some(parse_flag("published", &field_text(field).await?)?)
            }
            "keepExistingImage" => {
                form.keep_existing_image =
                    parse_flag("keepExistingImage", &field_text(field).await?)?
            }
            "keepExistingDocument" => {
                form.keep_existing_document =
                    parse_flag("keepExistingDocument", &field_text(field).await?)?
            }
            "image" => {
                form.new_image =
                    Some(store_attachment(state, UploadKind::Image, "image", field).await?)
            }
            "document" => {
                form.new_document =
                    Some(store_attachment(state, UploadKind::Document, "document", field).await?)
            }
            other => {
                return Err(AppError::Validation(format!("Unexpected field: {}", other)));
            }
        }
    }

    Ok(())
}

/// List all blogs, newest first
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "blogs",
    responses(
        (status = 200, description = "List of blogs", body = Vec<Blog>)
    )
)]
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    let blogs = state.services.repository.blogs.list().await?;
    Ok(Json(blogs))
}

/// Get blog by ID
#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "blogs",
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog details", body = Blog),
        (status = 404, description = "Blog not found")
    )
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Blog>> {
    let blog = state.services.repository.blogs.get_by_id(id).await?;
    Ok(Json(blog))
}

/// Create a new blog from a multipart form
#[utoipa::path(
    post,
    path = "/blogs",
    tag = "blogs",
    security(("bearer_auth" = [])),
    request_body(content = CreateBlog, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Blog created", body = Blog),
        (status = 400, description = "Invalid input or rejected attachment"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_blog(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Blog>)> {
    claims.require_admin()?;

    let mut input = CreateBlog {
        published: true,
        ..Default::default()
    };

    let parsed = fill_create_form(&state, &mut multipart, &mut input)
        .await
        .and_then(|_| check(&input));
    if let Err(e) = parsed {
        discard_new_files(&state, input.image.as_deref(), input.document.as_deref()).await;
        return Err(e);
    }

    match state.services.repository.blogs.create(&input).await {
        Ok(blog) => Ok((StatusCode::CREATED, Json(blog))),
        Err(e) => {
            discard_new_files(&state, input.image.as_deref(), input.document.as_deref()).await;
            Err(e)
        }
    }
}

/// Update an existing blog from a multipart form.
///
/// A freshly uploaded file replaces the stored one; without a new file the
/// attachment is kept only when the matching `keepExisting*` flag is
/// `"true"`, otherwise it is cleared. The previously stored file is removed
/// from disk in both the replace and clear cases.
#[utoipa::path(
    put,
    path = "/blogs/{id}",
    tag = "blogs",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog updated", body = Blog),
        (status = 404, description = "Blog not found"),
        (status = 400, description = "Invalid input or rejected attachment")
    )
)]
pub async fn update_blog(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<Json<Blog>> {
    claims.require_admin()?;

    let mut form = UpdateForm::default();
    if let Err(e) = fill_update_form(&state, &mut multipart, &mut form).await {
        discard_new_files(&state, form.new_image.as_deref(), form.new_document.as_deref()).await;
        return Err(e);
    }

    let existing = match state.services.repository.blogs.get_by_id(id).await {
        Ok(blog) => blog,
        Err(e) => {
            discard_new_files(&state, form.new_image.as_deref(), form.new_document.as_deref())
                .await;
            return Err(e);
        }
    };

    form.fields.image = match (form.new_image.take(), form.keep_existing_image) {
        (Some(path), _) => Some(Some(path)),
        (None, true) => None,
        (None, false) => Some(None),
    };
    form.fields.document = match (form.new_document.take(), form.keep_existing_document) {
        (Some(path), _) => Some(Some(path)),
        (None, true) => None,
        (None, false) => Some(None),
    };

    let updated = match state.services.repository.blogs.update(id, &form.fields).await {
        Ok(blog) => blog,
        Err(e) => {
            let new_image = form.fields.image.as_ref().and_then(|v| v.as_deref());
            let new_document = form.fields.document.as_ref().and_then(|v| v.as_deref());
            discard_new_files(&state, new_image, new_document).await;
            return Err(e);
        }
    };

    // The database now references the new state; drop files it no longer points at
    if let Some(new_value) = &form.fields.image {
        if let Some(old) = &existing.image {
            if new_value.as_deref() != Some(old.as_str()) {
                state.services.uploads.remove(old).await;
            }
        }
    }
    if let Some(new_value) = &form.fields.document {
        if let Some(old) = &existing.document {
            if new_value.as_deref() != Some(old.as_str()) {
                state.services.uploads.remove(old).await;
            }
        }
    }

    Ok(Json(updated))
}

/// Delete a blog and its stored attachments
#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "blogs",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog deleted", body = MessageResponse),
        (status = 404, description = "Blog not found")
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    let blog = state.services.repository.blogs.get_by_id(id).await?;
    state.services.repository.blogs.delete(id).await?;

    if let Some(ref image) = blog.image {
        state.services.uploads.remove(image).await;
    }
    if let Some(ref document) = blog.document {
        state.services.uploads.remove(document).await;
    }

    Ok(Json(MessageResponse {
        message: "Blog deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_only_literal_booleans() {
        assert!(parse_flag("published", "true").unwrap());
        assert!(!parse_flag("published", "false").unwrap());
        assert!(parse_flag("published", "TRUE").is_err());
        assert!(parse_flag("published", "1").is_err());
        assert!(parse_flag("published", "").is_err());
    }
}
