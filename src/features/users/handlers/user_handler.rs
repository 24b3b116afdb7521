use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireSuperAdmin;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::localized::LangQuery;
use crate::shared::types::{ApiResponse, Meta};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// List CMS users (super admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Super admin access required")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    RequireSuperAdmin(_user): RequireSuperAdmin,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    let meta = Meta::total(users.len());
    Ok(Json(ApiResponse::success(Some(users), None, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    params(LangQuery),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Super admin access required"),
        (status = 409, description = "Username already taken")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_user(
    RequireSuperAdmin(_user): RequireSuperAdmin,
    State(service): State<Arc<UserService>>,
    Query(query): Query<LangQuery>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create(dto, query.lang).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(user), None, None)),
    ))
}

/// Edit a user or reset their password
///
/// An empty password keeps the current one. Saving an unknown id creates it.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(
        ("id" = String, Path, description = "User ID"),
        LangQuery
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User saved", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Super admin access required"),
        (status = 409, description = "Username already taken")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_user(
    RequireSuperAdmin(_user): RequireSuperAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.update(&id, dto, query.lang).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(
        ("id" = String, Path, description = "User ID"),
        LangQuery
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 403, description = "Not a super admin, or deleting yourself"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_user(
    RequireSuperAdmin(user): RequireSuperAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id, &user, query.lang).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User deleted".to_string()),
        None,
    )))
}
