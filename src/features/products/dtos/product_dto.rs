use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::products::models::Product;
use crate::shared::localized::{validate_localized_required, LocalizedString};

/// Request DTO for creating or updating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductDto {
    #[validate(length(min = 1, message = "categoryId is required"))]
    pub category_id: String,

    #[validate(custom(function = "validate_localized_required"))]
    pub name: LocalizedString,

    #[serde(default)]
    pub description: LocalizedString,

    #[serde(default)]
    pub features: LocalizedString,

    #[serde(default)]
    pub price: String,

    /// Defaults to a placeholder image when empty
    #[serde(default)]
    pub image_url: Option<String>,

    /// Gallery URLs; uploaded images are added through the upload endpoint
    #[serde(default)]
    pub images: Vec<String>,
}

/// Query params for the product lists
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQueryParams {
    /// Case-insensitive search on the English or Chinese name (admin list)
    pub q: Option<String>,
    /// Category id filter
    pub category: Option<String>,
}

/// Product together with its category and the images to show
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    pub product: Product,
    /// None when the category was deleted
    pub category: Option<Category>,
    pub display_images: Vec<String>,
}

/// Upload request for OpenAPI documentation.
/// The handler reads the multipart stream directly; every part that carries
/// a filename is treated as one image, so `files` may be repeated.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImagesDto {
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: String,
}

/// An uploaded file that was not added to the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedUploadDto {
    pub file_name: String,
    pub reason: String,
}

/// Response DTO for image uploads
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponseDto {
    pub product: Product,
    pub added: usize,
    pub skipped: Vec<SkippedUploadDto>,
}
