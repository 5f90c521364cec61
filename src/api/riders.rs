//! Rider endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::rider::{CreateRider, Rider, UpdateRider},
};

use super::{check, AuthenticatedUser, MessageResponse};

/// List all riders
#[utoipa::path(
    get,
    path = "/riders",
    tag = "riders",
    responses(
        (status = 200, description = "List of riders", body = Vec<Rider>)
    )
)]
pub async fn list_riders(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Rider>>> {
    let riders = state.services.repository.riders.list().await?;
    Ok(Json(riders))
}

/// Get rider by ID
#[utoipa::path(
    get,
    path = "/riders/{id}",
    tag = "riders",
    params(
        ("id" = i32, Path, description = "Rider ID")
    ),
    responses(
        (status = 200, description = "Rider details", body = Rider),
        (status = 404, description = "Rider not found")
    )
)]
pub async fn get_rider(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Rider>> {
    let rider = state.services.repository.riders.get_by_id(id).await?;
    Ok(Json(rider))
}

/// Create a new rider
#[utoipa::path(
    post,
    path = "/riders",
    tag = "riders",
    security(("bearer_auth" = [])),
    request_body = CreateRider,
    responses(
        (status = 201, description = "Rider created", body = Rider),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_rider(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateRider>,
) -> AppResult<(StatusCode, Json<Rider>)> {
    claims.require_admin()?;
    check(&input)?;

    let created = state.services.repository.riders.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing rider
#[utoipa::path(
    put,
    path = "/riders/{id}",
    tag = "riders",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Rider ID")
    ),
    request_body = UpdateRider,
    responses(
        (status = 200, description = "Rider updated", body = Rider),
        (status = 404, description = "Rider not found")
    )
)]
pub async fn update_rider(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateRider>,
) -> AppResult<Json<Rider>> {
    claims.require_admin()?;

    let updated = state.services.repository.riders.update(id, &input).await?;
    Ok(Json(updated))
}

/// Delete a rider
#[utoipa::path(
    delete,
    path = "/riders/{id}",
    tag = "riders",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Rider ID")
    ),
    responses(
        (status = 200, description = "Rider deleted", body = MessageResponse),
        (status = 404, description = "Rider not found")
    )
)]
pub async fn delete_rider(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.repository.riders.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Rider deleted successfully".to_string(),
    }))
}
