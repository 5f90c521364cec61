//! Itinerary endpoints.
//!
//! The `destinations` attribute holds soft references: ids are persisted as
//! provided and never checked against the destinations table.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::itinerary::{CreateItinerary, Itinerary, UpdateItinerary},
};

use super::{check, AuthenticatedUser, MessageResponse};

/// List all itineraries
#[utoipa::path(
    get,
    path = "/itineraries",
    tag = "itineraries",
    responses(
        (status = 200, description = "List of itineraries", body = Vec<Itinerary>)
    )
)]
pub async fn list_itineraries(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Itinerary>>> {
    let itineraries = state.services.repository.itineraries.list().await?;
    Ok(Json(itineraries))
}

/// Get itinerary by ID
#[utoipa::path(
    get,
    path = "/itineraries/{id}",
    tag = "itineraries",
    params(
        ("id" = i32, Path, description = "Itinerary ID")
    ),
    responses(
        (status = 200, description = "Itinerary details", body = Itinerary),
        (status = 404, description = "Itinerary not found")
    )
)]
pub async fn get_itinerary(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Itinerary>> {
    let itinerary = state.services.repository.itineraries.get_by_id(id).await?;
    Ok(Json(itinerary))
}

/// Create a new itinerary
#[utoipa::path(
    post,
    path = "/itineraries",
    tag = "itineraries",
    security(("bearer_auth" = [])),
    request_body = CreateItinerary,
    responses(
        (status = 201, description = "Itinerary created", body = Itinerary),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_itinerary(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateItinerary>,
) -> AppResult<(StatusCode, Json<Itinerary>)> {
    claims.require_admin()?;
    check(&input)?;

    let created = state.services.repository.itineraries.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing itinerary
#[utoipa::path(
    put,
    path = "/itineraries/{id}",
    tag = "itineraries",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Itinerary ID")
    ),
    request_body = UpdateItinerary,
    responses(
        (status = 200, description = "Itinerary updated", body = Itinerary),
        (status = 404, description = "Itinerary not found")
    )
)]
pub async fn update_itinerary(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateItinerary>,
) -> AppResult<Json<Itinerary>> {
    claims.require_admin()?;

    let updated = state.services.repository.itineraries.update(id, &input).await?;
    Ok(Json(updated))
}

/// Delete an itinerary
#[utoipa::path(
    delete,
    path = "/itineraries/{id}",
    tag = "itineraries",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Itinerary ID")
    ),
    responses(
        (status = 200, description = "Itinerary deleted", body = MessageResponse),
        (status = 404, description = "Itinerary not found")
    )
)]
pub async fn delete_itinerary(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.repository.itineraries.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Itinerary deleted successfully".to_string(),
    }))
}
