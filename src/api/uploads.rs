//! Standalone upload endpoints and document retrieval

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::Multipart;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    services::uploads::{UploadKind, IMAGE_UPLOAD_LIMIT},
    AppState,
};

use super::AuthenticatedUser;

/// Response for a successful image upload
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub message: String,
    pub image_url: String,
}

/// Upload a standalone image, used by the admin console for the imageUrl
/// fields of destinations, accommodations, vehicles and investments
#[utoipa::path(
    post,
    path = "/upload/image",
    tag = "uploads",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Image stored", body = UploadImageResponse),
        (status = 400, description = "Missing file, wrong type or over the size limit"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadImageResponse>)> {
    claims.require_admin()?;

    let mut image_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name != "image" {
            return Err(AppError::Validation(format!("Unexpected field: {}", name)));
        }

        let original = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))?;

        let path = state
            .services
            .uploads
            .store(UploadKind::Image, "image", &original, &content_type, &bytes, IMAGE_UPLOAD_LIMIT)
            .await?;
        image_url = Some(path);
    }

    let image_url =
        image_url.ok_or_else(|| AppError::BadRequest("No image file provided".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(UploadImageResponse {
            message: "Image uploaded successfully".to_string(),
            image_url,
        }),
    ))
}

/// Serve a stored document, forcing download.
///
/// PDFs get an explicit content type and an attachment disposition so
/// browsers save the file instead of rendering it inline.
#[utoipa::path(
    get,
    path = "/uploads/documents/{filename}",
    tag = "uploads",
    params(
        ("filename" = String, Path, description = "Stored document filename")
    ),
    responses(
        (status = 200, description = "Document content", content_type = "application/pdf"),
        (status = 404, description = "Document not found")
    )
)]
pub async fn download_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    // Reject path traversal before touching the filesystem
    if filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0')
    {
        return Err(AppError::BadRequest("Invalid filename".to_string()));
    }

    let path = state.services.uploads.root().join("documents").join(&filename);

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound("Document not found".to_string()))?;

    let content_type = if filename.to_lowercase().ends_with(".pdf") {
        "application/pdf"
    } else {
        "application/octet-stream"
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}
