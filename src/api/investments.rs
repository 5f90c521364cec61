//! Investment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::investment::{CreateInvestment, Investment, UpdateInvestment},
};

use super::{check, AuthenticatedUser, MessageResponse};

/// List all investments
#[utoipa::path(
    get,
    path = "/investments",
    tag = "investments",
    responses(
        (status = 200, description = "List of investments", body = Vec<Investment>)
    )
)]
pub async fn list_investments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Investment>>> {
    let investments = state.services.repository.investments.list().await?;
    Ok(Json(investments))
}

/// Get investment by ID
#[utoipa::path(
    get,
    path = "/investments/{id}",
    tag = "investments",
    params(
        ("id" = i32, Path, description = "Investment ID")
    ),
    responses(
        (status = 200, description = "Investment details", body = Investment),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn get_investment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Investment>> {
    let investment = state.services.repository.investments.get_by_id(id).await?;
    Ok(Json(investment))
}

/// Create a new investment
#[utoipa::path(
    post,
    path = "/investments",
    tag = "investments",
    security(("bearer_auth" = [])),
    request_body = CreateInvestment,
    responses(
        (status = 201, description = "Investment created", body = Investment),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_investment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CreateInvestment>,
) -> AppResult<(StatusCode, Json<Investment>)> {
    claims.require_admin()?;
    check(&input)?;

    let created = state.services.repository.investments.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing investment
#[utoipa::path(
    put,
    path = "/investments/{id}",
    tag = "investments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Investment ID")
    ),
    request_body = UpdateInvestment,
    responses(
        (status = 200, description = "Investment updated", body = Investment),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn update_investment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateInvestment>,
) -> AppResult<Json<Investment>> {
    claims.require_admin()?;

    let updated = state.services.repository.investments.update(id, &input).await?;
    Ok(Json(updated))
}

/// Delete an investment
#[utoipa::path(
    delete,
    path = "/investments/{id}",
    tag = "investments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Investment ID")
    ),
    responses(
        (status = 200, description = "Investment deleted", body = MessageResponse),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn delete_investment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.repository.investments.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Investment deleted successfully".to_string(),
    }))
}
