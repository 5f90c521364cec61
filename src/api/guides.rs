//! Guide endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::guide::{CreateGuide, Guide, UpdateGuide},
};

use super::{check, AuthenticatedUser, MessageResponse};

/// List all guides
#[utoipa::path(
    get,
    path = "/guides",
    tag = "guides",
    responses(
        (status = 200, description = "List of guides", body = Vec<Guide>)
    )
)]
pub async fn list_guides(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Guide>>> {
    let guides = state.services.repository.guides.list().await?;
    Ok(Json(guides))
}

/// Get guide by ID
#[utoipa::path(
    get,
    path = "/guides/{id}",
    tag = "guides",
    params(
        ("id" = i32, Path, description = "Guide ID")
    ),
    responses(
        (status = 200, description = "Guide details", body = Guide),
        (status = 404, description = "Guide not found")
    )
)]
pub async fn get_guide(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Guide>> {
    let guide = state.services.repository.guides.get_by_id(id).await?;
    Ok(Json(guide))
}

/// Create a new guide
#[utoipa::path(
    post,
    path = "/guides",
    tag = "guides",
    security(("bearer_auth" = [])),
    request_body = CreateGuide,
    responses(
        (status = 201, description = "Guide created", body = Guide),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_guide(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateGuide>,
) -> AppResult<(StatusCode, Json<Guide>)> {
    claims.require_admin()?;
    check(&input)?;

    let created = state.services.repository.guides.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing guide
#[utoipa::path(
    put,
    path = "/guides/{id}",
    tag = "guides",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Guide ID")
    ),
    request_body = UpdateGuide,
    responses(
        (status = 200, description = "Guide updated", body = Guide),
        (status = 404, description = "Guide not found")
    )
)]
pub async fn update_guide(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateGuide>,
) -> AppResult<Json<Guide>> {
    claims.require_admin()?;

    let updated = state.services.repository.guides.update(id, &input).await?;
    Ok(Json(updated))
}

/// Delete a guide
#[utoipa::path(
    delete,
    path = "/guides/{id}",
    tag = "guides",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Guide ID")
    ),
    responses(
        (status = 200, description = "Guide deleted", body = MessageResponse),
        (status = 404, description = "Guide not found")
    )
)]
pub async fn delete_guide(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.repository.guides.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Guide deleted successfully".to_string(),
    }))
}
