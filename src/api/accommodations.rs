//! Accommodation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::accommodation::{Accommodation, CreateAccommodation, UpdateAccommodation},
};

use super::{check, AuthenticatedUser, MessageResponse};

/// List all accommodations
#[utoipa::path(
    get,
    path = "/accommodations",
    tag = "accommodations",
    responses(
        (status = 200, description = "List of accommodations", body = Vec<Accommodation>)
    )
)]
pub async fn list_accommodations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Accommodation>>> {
    let accommodations = state.services.repository.accommodations.list().await?;
    Ok(Json(accommodations))
}

/// Get accommodation by ID
#[utoipa::path(
    get,
    path = "/accommodations/{id}",
    tag = "accommodations",
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Accommodation details", body = Accommodation),
        (status = 404, description = "Accommodation not found")
    )
)]
pub async fn get_accommodation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Accommodation>> {
    let accommodation = state.services.repository.accommodations.get_by_id(id).await?;
    Ok(Json(accommodation))
}

/// Create a new accommodation
#[utoipa::path(
    post,
    path = "/accommodations",
    tag = "accommodations",
    security(("bearer_auth" = [])),
    request_body = CreateAccommodation,
    responses(
        (status = 201, description = "Accommodation created", body = Accommodation),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_accommodation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateAccommodation>,
) -> AppResult<(StatusCode, Json<Accommodation>)> {
    claims.require_admin()?;
    check(&input)?;

    let created = state.services.repository.accommodations.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing accommodation
#[utoipa::path(
    put,
    path = "/accommodations/{id}",
    tag = "accommodations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    request_body = UpdateAccommodation,
    responses(
        (status = 200, description = "Accommodation updated", body = Accommodation),
        (status = 404, description = "Accommodation not found")
    )
)]
pub async fn update_accommodation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateAccommodation>,
) -> AppResult<Json<Accommodation>> {
    claims.require_admin()?;

    let updated = state.services.repository.accommodations.update(id, &input).await?;
    Ok(Json(updated))
}

/// Delete an accommodation
#[utoipa::path(
    delete,
    path = "/accommodations/{id}",
    tag = "accommodations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Accommodation deleted", body = MessageResponse),
        (status = 404, description = "Accommodation not found")
    )
)]
pub async fn delete_accommodation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.repository.accommodations.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Accommodation deleted successfully".to_string(),
    }))
}
