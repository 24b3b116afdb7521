use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::site::dtos::{
    CatalogQuery, CatalogViewDto, HomeViewDto, LocalizedPageDto, ProductViewDto,
};
use crate::features::site::services::SiteService;
use crate::shared::localized::LangQuery;
use crate::shared::types::{ApiResponse, Meta};

#[utoipa::path(
    get,
    path = "/api/site/home",
    params(LangQuery),
    responses(
        (status = 200, description = "Home page view", body = ApiResponse<HomeViewDto>),
    ),
    tag = "site"
)]
pub async fn home(
    State(service): State<Arc<SiteService>>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<HomeViewDto>>> {
    let view = service.home(query.lang).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/site/about",
    params(LangQuery),
    responses(
        (status = 200, description = "About page view", body = ApiResponse<LocalizedPageDto>),
        (status = 404, description = "Page not found")
    ),
    tag = "site"
)]
pub async fn about(
    State(service): State<Arc<SiteService>>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<LocalizedPageDto>>> {
    let view = service.page("about", query.lang).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/site/contact",
    params(LangQuery),
    responses(
        (status = 200, description = "Contact page view", body = ApiResponse<LocalizedPageDto>),
        (status = 404, description = "Page not found")
    ),
    tag = "site"
)]
pub async fn contact(
    State(service): State<Arc<SiteService>>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<LocalizedPageDto>>> {
    let view = service.page("contact", query.lang).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Product catalog view
///
/// Selecting a category shows its products and those of its direct children.
#[utoipa::path(
    get,
    path = "/api/site/products",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Catalog view", body = ApiResponse<CatalogViewDto>),
    ),
    tag = "site"
)]
pub async fn products(
    State(service): State<Arc<SiteService>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse<CatalogViewDto>>> {
    let view = service
        .catalog(query.lang, query.category.as_deref())
        .await?;
    let meta = Meta::total(view.total);
    Ok(Json(ApiResponse::success(Some(view), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/site/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Product detail view", body = ApiResponse<ProductViewDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "site"
)]
pub async fn product(
    State(service): State<Arc<SiteService>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ApiResponse<ProductViewDto>>> {
    let view = service.product(&id, query.lang).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}
