//! API handlers for Serendib REST endpoints

pub mod accommodations;
pub mod auth;
pub mod blogs;
pub mod destinations;
pub mod guides;
pub mod health;
pub mod investments;
pub mod itineraries;
pub mod openapi;
pub mod riders;
pub mod stats;
pub mod uploads;
pub mod vehicles;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Confirmation body for delete operations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Validate an input DTO, mapping failures to a 400 response
pub(crate) fn check<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Extractor for authenticated user from JWT token.
///
/// Every failure mode (missing header, malformed header, expired or
/// tampered token) produces the same message so the response never reveals
/// which check failed.
pub struct AuthenticatedUser(pub UserClaims);

const TOKEN_REJECTED: &str = "Invalid or expired token";

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication(TOKEN_REJECTED.to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(TOKEN_REJECTED.to_string()));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::Authentication(TOKEN_REJECTED.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}
