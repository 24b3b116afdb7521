use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::pages::dtos::{PageSlug, SavePageDto};
use crate::features::pages::models::PageContent;
use crate::features::pages::services::PageService;
use crate::shared::types::{ApiResponse, Meta};

/// Get page by slug
#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Page found", body = ApiResponse<PageContent>),
        (status = 404, description = "Page not found")
    ),
    tag = "pages"
)]
pub async fn get_page(
    State(service): State<Arc<PageService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PageContent>>> {
    let page = service.get(&slug).await?;
    Ok(Json(ApiResponse::success(Some(page), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/admin/pages",
    responses(
        (status = 200, description = "List of pages", body = ApiResponse<Vec<PageContent>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "pages",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_pages(
    State(service): State<Arc<PageService>>,
) -> Result<Json<ApiResponse<Vec<PageContent>>>> {
    let pages = service.list().await?;
    let meta = Meta::total(pages.len());
    Ok(Json(ApiResponse::success(Some(pages), None, Some(meta))))
}

/// Create or replace the page at `slug`
#[utoipa::path(
    put,
    path = "/api/admin/pages/{slug}",
    params(
        ("slug" = String, Path, description = "Page slug (lowercase, hyphen separated)")
    ),
    request_body = SavePageDto,
    responses(
        (status = 200, description = "Page saved", body = ApiResponse<PageContent>),
        (status = 400, description = "Invalid slug"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "pages",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_page(
    State(service): State<Arc<PageService>>,
    Path(slug): Path<String>,
    AppJson(dto): AppJson<SavePageDto>,
) -> Result<Json<ApiResponse<PageContent>>> {
    let slug = PageSlug { slug };
    slug.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let page = service.save(&slug.slug, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(page),
        Some("Page updated successfully".to_string()),
        None,
    )))
}
