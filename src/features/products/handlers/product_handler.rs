use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{
    ImageUploadResponseDto, ProductDetailDto, ProductQueryParams, SaveProductDto, UploadImagesDto,
};
use crate::features::products::models::Product;
use crate::features::products::services::{ImageUpload, ProductService};
use crate::shared::localized::LangQuery;
use crate::shared::types::{ApiResponse, Meta};

/// List products for the public catalog
///
/// With `category`, products of that category and of its direct children.
#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category" = Option<String>, Query, description = "Category ID (includes direct children)")
    ),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = service.list_public(params.category.as_deref()).await?;
    let meta = Meta::total(products.len());
    Ok(Json(ApiResponse::success(Some(products), None, Some(meta))))
}

/// Get product with its category and display images
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductDetailDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetailDto>>> {
    let detail = service.get_detail(&id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Admin product list with search
#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(ProductQueryParams),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admin_list_products(
    State(service): State<Arc<ProductService>>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = service.list(&params).await?;
    let meta = Meta::total(products.len());
    Ok(Json(ApiResponse::success(Some(products), None, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = SaveProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<SaveProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = SaveProductDto,
    responses(
        (status = 200, description = "Product saved", body = ApiResponse<Product>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<SaveProductDto>,
) -> Result<Json<ApiResponse<Product>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.save(&id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product deleted".to_string()),
        None,
    )))
}

/// Upload gallery images
///
/// Every file part is inlined as a `data:` URL and appended to the gallery.
/// Oversized or non-image files are reported under `skipped`.
#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/images",
    params(
        ("id" = String, Path, description = "Product ID"),
        LangQuery
    ),
    request_body(
        content = UploadImagesDto,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 200, description = "Upload processed", body = ApiResponse<ImageUploadResponseDto>),
        (status = 400, description = "Malformed multipart body"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found"),
        (status = 413, description = "Upload exceeds the request size limit")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_images(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImageUploadResponseDto>>> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart data", e))?
    {
        // Only file parts carry images
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            debug!("Ignoring non-file field: {:?}", field.name());
            continue;
        };

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file data", e))?;

        uploads.push(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if uploads.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    let result = service.add_images(&id, uploads, query.lang).await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}/images/{index}",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("index" = usize, Path, description = "Zero-based gallery position")
    ),
    responses(
        (status = 200, description = "Image removed", body = ApiResponse<Product>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product or image not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn remove_image(
    State(service): State<Arc<ProductService>>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<ApiResponse<Product>>> {
    let product = service.remove_image(&id, index).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

fn multipart_error(context: &str, e: MultipartError) -> AppError {
    debug!("{}: {}", context, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(format!("{}: upload exceeds the size limit", context));
    }
    AppError::BadRequest(format!("{}: {}", context, e))
}
