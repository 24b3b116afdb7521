use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, MeResponseDto};
use crate::features::auth::model::SessionUser;
use crate::features::auth::services::AuthService;
use crate::shared::localized::LangQuery;
use crate::shared::types::ApiResponse;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// Login with username and password
///
/// Starts the single current session; any earlier token stops working.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    params(LangQuery),
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    Query(query): Query<LangQuery>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let session = service.login(dto, query.lang).await?;
    Ok(Json(ApiResponse::success(
        Some(LoginResponseDto::from(session)),
        None,
        None,
    )))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn logout(
    _user: SessionUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ApiResponse<()>>> {
    service.logout().await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Logged out".to_string()),
        None,
    )))
}

/// Get current session user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    _user: SessionUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ApiResponse<MeResponseDto>>> {
    let session = service
        .current()
        .await
        .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(MeResponseDto::from(session)),
        None,
        None,
    )))
}
