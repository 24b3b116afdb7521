use std::sync::Arc;

use base64::prelude::*;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{with_direct_children, Category};
use crate::features::products::dtos::{
    ImageUploadResponseDto, ProductDetailDto, ProductQueryParams, SaveProductDto,
    SkippedUploadDto,
};
use crate::features::products::models::Product;
use crate::modules::storage::{new_record_id, ContentStore};
use crate::shared::constants::{MAX_IMAGES_PER_UPLOAD, MULTIPART_OVERHEAD, PLACEHOLDER_IMAGE_URL};
use crate::shared::localized::{pick, LanguageCode};

/// One file part of an image upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            BASE64_STANDARD.encode(&self.bytes)
        )
    }
}

/// Service for product operations
pub struct ProductService {
    store: Arc<ContentStore>,
    max_image_size: usize,
}

impl ProductService {
    pub fn new(store: Arc<ContentStore>, max_image_size: usize) -> Self {
        Self {
            store,
            max_image_size,
        }
    }

    /// Admin list: `q` matches either name case-insensitively, `category`
    /// matches the product's own category exactly
    pub async fn list(&self, params: &ProductQueryParams) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.store.get_all().await?;
        let term = params.q.as_deref().unwrap_or("").trim();
        let category = params.category.as_deref().filter(|c| !c.is_empty());

        Ok(products
            .into_iter()
            .filter(|p| term.is_empty() || p.name.contains_ignore_case(term))
            .filter(|p| category.is_none_or(|c| p.category_id == c))
            .collect())
    }

    /// Public list: a category filter also matches its direct children
    pub async fn list_public(&self, category: Option<&str>) -> Result<Vec<Product>> {
        let (products, categories) = futures::try_join!(
            self.store.get_all::<Product>(),
            self.store.get_all::<Category>()
        )?;

        Ok(filter_by_category(products, &categories, category))
    }

    pub async fn get(&self, id: &str) -> Result<Product> {
        let products: Vec<Product> = self.store.get_all().await?;
        products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| product_not_found(id))
    }

    pub async fn get_detail(&self, id: &str) -> Result<ProductDetailDto> {
        let (products, categories) = futures::try_join!(
            self.store.get_all::<Product>(),
            self.store.get_all::<Category>()
        )?;

        let product = products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| product_not_found(id))?;
        let category = categories
            .into_iter()
            .find(|c| c.id == product.category_id);

        Ok(ProductDetailDto {
            display_images: product.display_images(),
            product,
            category,
        })
    }

    pub async fn create(&self, dto: SaveProductDto) -> Result<Product> {
        self.save(&new_record_id(), dto).await
    }

    /// Write the product at `id`, replacing it or appending it
    pub async fn save(&self, id: &str, dto: SaveProductDto) -> Result<Product> {
        let image_url = dto
            .image_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        let product = self
            .store
            .save_one(Product {
                id: id.to_string(),
                category_id: dto.category_id,
                name: dto.name,
                description: dto.description,
                features: dto.features,
                price: dto.price,
                image_url,
                images: dto.images,
            })
            .await?;

        tracing::info!(
            "Product saved: id={}, category={}, images={}",
            product.id,
            product.category_id,
            product.images.len()
        );

        Ok(product)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.store.delete_one::<Product>(id).await? {
            return Err(product_not_found(id));
        }

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }

    /// Inline uploaded images as data URLs at the end of the gallery.
    ///
    /// Oversized and non-image files are skipped and reported; the rest
    /// are still added.
    pub async fn add_images(
        &self,
        id: &str,
        uploads: Vec<ImageUpload>,
        lang: LanguageCode,
    ) -> Result<ImageUploadResponseDto> {
        let mut added = Vec::new();
        let mut skipped = Vec::new();

        for upload in uploads {
            if upload.bytes.len() > self.max_image_size {
                tracing::warn!(
                    "Skipping upload '{}' for product {}: {} bytes",
                    upload.file_name,
                    id,
                    upload.bytes.len()
                );
                skipped.push(SkippedUploadDto {
                    reason: too_large_message(&upload.file_name, self.max_image_size, lang),
                    file_name: upload.file_name,
                });
                continue;
            }

            if !upload.content_type.starts_with("image/") {
                skipped.push(SkippedUploadDto {
                    reason: pick(
                        lang,
                        &format!("File {} is not an image. Skipped.", upload.file_name),
                        &format!("文件 {} 不是图片，已跳过。", upload.file_name),
                    ),
                    file_name: upload.file_name,
                });
                continue;
            }

            added.push(upload.to_data_url());
        }

        let count = added.len();
        let product = if added.is_empty() {
            self.get(id).await?
        } else {
            self.store
                .update_one::<Product, AppError, _>(id, move |product| {
                    product.images.extend(added);
                    Ok(())
                })
                .await?
                .ok_or_else(|| product_not_found(id))?
        };

        tracing::info!(
            "Images uploaded for product {}: added={}, skipped={}",
            id,
            count,
            skipped.len()
        );

        Ok(ImageUploadResponseDto {
            product,
            added: count,
            skipped,
        })
    }

    /// Remove the gallery image at `index`
    pub async fn remove_image(&self, id: &str, index: usize) -> Result<Product> {
        let product = self
            .store
            .update_one::<Product, AppError, _>(id, |product| {
                if index >= product.images.len() {
                    return Err(AppError::NotFound(format!(
                        "Image {} of product '{}' not found",
                        index, id
                    )));
                }
                product.images.remove(index);
                Ok(())
            })
            .await?
            .ok_or_else(|| product_not_found(id))?;

        tracing::info!("Image {} removed from product {}", index, id);
        Ok(product)
    }

    /// Request body cap for one upload batch: a full batch of images at the
    /// size limit plus multipart framing
    pub fn upload_body_limit(&self) -> usize {
        self.max_image_size
            .saturating_mul(MAX_IMAGES_PER_UPLOAD)
            .saturating_add(MULTIPART_OVERHEAD)
    }
}

/// Keep products in the selected category or one of its direct children
pub fn filter_by_category(
    products: Vec<Product>,
    categories: &[Category],
    selected: Option<&str>,
) -> Vec<Product> {
    match selected.filter(|s| !s.is_empty()) {
        None => products,
        Some(id) => {
            let ids = with_direct_children(categories, id);
            products
                .into_iter()
                .filter(|p| ids.contains(p.category_id.as_str()))
                .collect()
        }
    }
}

fn product_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Product '{}' not found", id))
}

fn too_large_message(file_name: &str, max: usize, lang: LanguageCode) -> String {
    let (en, zh) = if max >= 1_000_000 && max % 1_000_000 == 0 {
        (format!("{}MB", max / 1_000_000), format!("{}MB", max / 1_000_000))
    } else {
        (format!("{} bytes", max), format!("{} 字节", max))
    };
    pick(
        lang,
        &format!("File {} is too large (>{}). Skipped.", file_name, en),
        &format!("文件 {} 过大（>{}），已跳过。", file_name, zh),
    )
}
