use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryTreeDto, SaveCategoryDto};
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::shared::localized::LangQuery;
use crate::shared::types::{ApiResponse, Meta};

/// Query params for listing categories
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    /// If true, return tree structure. Default: false (flat list)
    #[serde(default)]
    pub tree: bool,
}

/// List all categories
///
/// Returns categories as flat list or tree structure based on `tree` query param.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("tree" = Option<bool>, Query, description = "Return tree structure if true")
    ),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<Category>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let (value, total) = if query.tree {
        let tree = service.list_tree().await?;
        let total = tree.len();
        (serde_json::to_value(tree), total)
    } else {
        let categories = service.list().await?;
        let total = categories.len();
        (serde_json::to_value(categories), total)
    };

    let value = value.map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(ApiResponse::success(
        Some(value),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>> {
    let category = service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    params(LangQuery),
    request_body = SaveCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<LangQuery>,
    AppJson(dto): AppJson<SaveCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto, query.lang).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

/// Save the category at `id` (appended when the id is new)
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID"),
        LangQuery
    ),
    request_body = SaveCategoryDto,
    responses(
        (status = 200, description = "Category saved", body = ApiResponse<Category>),
        (status = 400, description = "Validation error or self-parent"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
    AppJson(dto): AppJson<SaveCategoryDto>,
) -> Result<Json<ApiResponse<Category>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.save(&id, dto, query.lang).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category; products that reference it are left untouched
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted".to_string()),
        None,
    )))
}
