//! Destination endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::destination::{CreateDestination, Destination, UpdateDestination},
};

use super::{check, AuthenticatedUser, MessageResponse};

/// List all destinations
#[utoipa::path(
    get,
    path = "/destinations",
    tag = "destinations",
    responses(
        (status = 200, description = "List of destinations", body = Vec<Destination>)
    )
)]
pub async fn list_destinations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Destination>>> {
    let destinations = state.services.repository.destinations.list().await?;
    Ok(Json(destinations))
}

/// Get destination by ID
#[utoipa::path(
    get,
    path = "/destinations/{id}",
    tag = "destinations",
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination details", body = Destination),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn get_destination(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Destination>> {
    let destination = state.services.repository.destinations.get_by_id(id).await?;
    Ok(Json(destination))
}

/// Create a new destination
#[utoipa::path(
    post,
    path = "/destinations",
    tag = "destinations",
    security(("bearer_auth" = [])),
    request_body = CreateDestination,
    responses(
        (status = 201, description = "Destination created", body = Destination),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_destination(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateDestination>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    claims.require_admin()?;
    check(&input)?;

    let created = state.services.repository.destinations.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing destination
#[utoipa::path(
    put,
    path = "/destinations/{id}",
    tag = "destinations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    request_body = UpdateDestination,
    responses(
        (status = 200, description = "Destination updated", body = Destination),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn update_destination(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateDestination>,
) -> AppResult<Json<Destination>> {
    claims.require_admin()?;
    check(&input)?;

    let updated = state.services.repository.destinations.update(id, &input).await?;
    Ok(Json(updated))
}

/// Delete a destination
#[utoipa::path(
    delete,
    path = "/destinations/{id}",
    tag = "destinations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination deleted", body = MessageResponse),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn delete_destination(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.repository.destinations.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Destination deleted successfully".to_string(),
    }))
}
